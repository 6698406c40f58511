//! Task List View
//!
//! Scrollable task list that owns the pull-to-refresh gesture and reloads
//! tasks from the backend when the pull is released past the threshold.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pull_refresh::{
    create_pull_refresh_signals, finish_refresh, make_on_touchcancel, make_on_touchend,
    make_on_touchmove, make_on_touchstart, PullToRefreshState, DEFAULT_THRESHOLD_PX,
};

use gloo_timers::future::TimeoutFuture;

use crate::api;
use crate::models::Task;
use crate::store::{store_set_tasks, use_app_store, AppStateStoreFields};
use super::PullToRefreshIndicator;

const MIN_SPINNER_MS: u32 = 400;

/// Status text for the indicator
pub fn refresh_label(state: &PullToRefreshState, threshold: f64) -> &'static str {
    if state.is_refreshing {
        "刷新中..."
    } else if state.is_armed(threshold) {
        "释放刷新"
    } else {
        "下拉刷新"
    }
}

/// Single task row
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let time_label = task.time_label();
    let row_class = if task.completed { "task-row completed" } else { "task-row" };

    view! {
        <li class=row_class>
            <input type="checkbox" checked=task.completed disabled=true />
            <div class="task-main">
                <span class="task-title">{task.title}</span>
                <span class="task-time">{time_label}</span>
            </div>
            {task.duration.map(|d| view! { <span class="task-duration">{d}</span> })}
        </li>
    }
}

/// Task list with pull-to-refresh
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();
    let prs = create_pull_refresh_signals(DEFAULT_THRESHOLD_PX);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let load_tasks = move |after: Option<Callback<()>>| {
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(tasks) => {
                    web_sys::console::log_1(&format!("[TASKS] Loaded {} tasks", tasks.len()).into());
                    store_set_tasks(&store, tasks);
                    set_load_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASKS] Load failed: {}", e).into());
                    set_load_error.set(Some(e));
                }
            }
            if let Some(done) = after {
                done.run(());
            }
        });
    };

    // Initial load
    Effect::new(move |_| load_tasks(None));

    let on_refresh = Callback::new(move |_| {
        load_tasks(Some(Callback::new(move |_| {
            // Keep the spinner up long enough to be seen
            spawn_local(async move {
                TimeoutFuture::new(MIN_SPINNER_MS).await;
                finish_refresh(&prs);
            });
        })));
    });

    let label = Signal::derive(move || refresh_label(&prs.state_read.get(), prs.threshold).to_string());

    view! {
        <div
            class="task-scroll"
            on:touchstart=make_on_touchstart(prs)
            on:touchmove=make_on_touchmove(prs)
            on:touchend=make_on_touchend(prs, on_refresh)
            on:touchcancel=make_on_touchcancel(prs)
        >
            <PullToRefreshIndicator state=prs.state_read label=label threshold=prs.threshold />

            {move || load_error.get().map(|e| view! { <p class="load-error">{e}</p> })}

            <Show
                when=move || !store.tasks().get().is_empty()
                fallback=|| view! { <p class="empty-hint">"还没有任务，点右下角 + 添加"</p> }
            >
                <ul class="task-list">
                    <For
                        each=move || store.tasks().get()
                        key=|task| task.id.clone()
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>

            <p class="task-count">{move || format!("{} 个任务", store.tasks().get().len())}</p>
        </div>
    }
}
