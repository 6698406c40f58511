//! New Task Form Component
//!
//! Modal form for the add-task flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::NewTask;
use crate::store::{store_add_task, use_app_store};

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build the request body from raw form fields
pub fn build_new_task(title: &str, start: String, end: String, duration: String, anytime: bool) -> Option<NewTask> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let (start_time, end_time) = if anytime {
        (None, None)
    } else {
        (non_empty(start), non_empty(end))
    };
    Some(NewTask {
        title: title.to_string(),
        start_time,
        end_time,
        duration: non_empty(duration),
        is_anytime: anytime,
    })
}

/// Add-task dialog, shown while `AppContext::adding_task` is set
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());
    let (duration, set_duration) = signal(String::new());
    let (anytime, set_anytime) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let reset = move || {
        set_title.set(String::new());
        set_start.set(String::new());
        set_end.set(String::new());
        set_duration.set(String::new());
        set_anytime.set(false);
        set_error.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(new_task) = build_new_task(
            &title.get_untracked(),
            start.get_untracked(),
            end.get_untracked(),
            duration.get_untracked(),
            anytime.get_untracked(),
        ) else {
            set_error.set(Some("请输入任务标题".to_string()));
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::create_task(&new_task).await {
                Ok(task) => {
                    store_add_task(&store, task);
                    reset();
                    ctx.close_add_task();
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    let cancel = move |_| {
        reset();
        ctx.close_add_task();
    };

    view! {
        <Show when=move || ctx.adding_task.get()>
            <div class="modal-backdrop">
                <form class="new-task-form" on:submit=submit>
                    <h2>"添加任务"</h2>
                    <input
                        type="text"
                        placeholder="任务标题"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <label class="anytime-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || anytime.get()
                            on:change=move |ev| set_anytime.set(event_target_checked(&ev))
                        />
                        "随时可做"
                    </label>
                    <Show when=move || !anytime.get()>
                        <div class="time-row">
                            <input
                                type="time"
                                prop:value=move || start.get()
                                on:input=move |ev| set_start.set(event_target_value(&ev))
                            />
                            <span>"至"</span>
                            <input
                                type="time"
                                prop:value=move || end.get()
                                on:input=move |ev| set_end.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <input
                        type="text"
                        placeholder="预计时长，如 30分钟"
                        prop:value=move || duration.get()
                        on:input=move |ev| set_duration.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=cancel>"取消"</button>
                        <button type="submit" disabled=move || saving.get()>"保存"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
