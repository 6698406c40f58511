//! Floating Toolbar Component
//!
//! Fixed-position action buttons: open the chat view, start adding a task.

use leptos::prelude::*;

use crate::context::{AppContext, Route};

/// Floating action toolbar
///
/// # Arguments
/// * `on_add_task` - Callback to open the add-task flow
#[component]
pub fn FloatingToolbar(#[prop(into)] on_add_task: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="floating-toolbar">
            <button
                class="floating-btn chat"
                title="AI 助手"
                on:click=move |_| ctx.navigate(Route::Chat)
            >
                "💬"
            </button>
            <button
                class="floating-btn add"
                title="添加任务"
                on:click=move |_| on_add_task.run(())
            >
                "+"
            </button>
        </div>
    }
}
