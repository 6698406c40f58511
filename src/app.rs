//! Task Chat Frontend App
//!
//! Single-page shell: task list or chat view, floating toolbar, add-task dialog.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ChatPanel, FloatingToolbar, NewTaskForm, TaskListView};
use crate::context::{AppContext, Route};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let route = signal(Route::current());
    let adding_task = signal(false);

    // Provide context to all children
    let ctx = AppContext::new(route, adding_task);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Back/forward and manual hash edits
    window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_route());

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::Tasks => view! {
                    <main class="main-content">
                        <h1>"今日任务"</h1>
                        <TaskListView />
                    </main>
                    <FloatingToolbar on_add_task=Callback::new(move |_| ctx.open_add_task()) />
                }.into_any(),
                Route::Chat => view! {
                    <ChatPanel />
                }.into_any(),
            }}

            <NewTaskForm />
        </div>
    }
}
