//! Chat Panel Component
//!
//! Conversation with the task assistant. Each send posts one message to
//! the relay; the log lives only in the page's store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Route};
use crate::markdown::render_reply;
use crate::models::{ChatEntry, ChatRole};
use crate::store::{store_push_chat, store_set_chat_pending, use_app_store, AppStateStoreFields};

/// One chat bubble
#[component]
fn ChatBubble(entry: ChatEntry) -> impl IntoView {
    match entry.role {
        ChatRole::User => view! {
            <div class="chat-bubble user">{entry.content}</div>
        }
        .into_any(),
        ChatRole::Assistant if entry.is_error => view! {
            <div class="chat-bubble assistant error">{entry.content}</div>
        }
        .into_any(),
        ChatRole::Assistant => view! {
            <div class="chat-bubble assistant markdown-body" inner_html=render_reply(&entry.content)></div>
        }
        .into_any(),
    }
}

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (draft, set_draft) = signal(String::new());
    let log_end = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        let _ = store.chat_log().get().len();
        let _ = store.chat_pending().get();
        if let Some(el) = log_end.get() {
            el.scroll_into_view();
        }
    });

    let send = move || {
        let message = draft.get_untracked().trim().to_string();
        if message.is_empty() || store.chat_pending().get_untracked() {
            return;
        }
        set_draft.set(String::new());
        store_push_chat(&store, ChatRole::User, message.clone(), false);
        store_set_chat_pending(&store, true);

        spawn_local(async move {
            match api::send_chat(&message).await {
                Ok(reply) => {
                    store_push_chat(&store, ChatRole::Assistant, reply, false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CHAT] {}", e).into());
                    store_push_chat(&store, ChatRole::Assistant, e, true);
                }
            }
            store_set_chat_pending(&store, false);
        });
    };

    view! {
        <section class="chat-panel">
            <header class="chat-header">
                <button class="back-btn" on:click=move |_| ctx.navigate(Route::Tasks)>"‹ 任务"</button>
                <h2>"AI 助手"</h2>
            </header>

            <div class="chat-log">
                <Show when=move || store.chat_log().get().is_empty()>
                    <p class="chat-hint">"问问我今天该怎么安排吧"</p>
                </Show>
                <For
                    each=move || store.chat_log().get()
                    key=|entry| entry.id
                    children=move |entry| view! { <ChatBubble entry=entry /> }
                />
                <Show when=move || store.chat_pending().get()>
                    <div class="chat-bubble assistant pending">"思考中..."</div>
                </Show>
                <div node_ref=log_end></div>
            </div>

            <form
                class="chat-input"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    type="text"
                    placeholder="输入消息..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || store.chat_pending().get()>"发送"</button>
            </form>
        </section>
    }
}
