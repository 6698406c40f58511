//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{ChatEntry, ChatRole, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks as last loaded from the backend, plus local additions
    pub tasks: Vec<Task>,
    /// Chat log for this page session
    pub chat_log: Vec<ChatEntry>,
    /// A chat request is in flight
    pub chat_pending: bool,
    /// Next chat entry id
    pub next_chat_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the task list
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Append a newly created task
pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Append a chat entry and return its id
pub fn store_push_chat(store: &AppStore, role: ChatRole, content: String, is_error: bool) -> u32 {
    let id = store.next_chat_id().get_untracked();
    store.next_chat_id().set(id + 1);
    store.chat_log().write().push(ChatEntry { id, role, content, is_error });
    id
}

pub fn store_set_chat_pending(store: &AppStore, pending: bool) {
    store.chat_pending().set(pending);
}
