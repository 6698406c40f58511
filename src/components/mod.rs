//! UI Components
//!
//! Reusable Leptos components.

mod floating_toolbar;
mod pull_to_refresh_indicator;
mod task_list;
mod new_task_form;
mod chat_panel;

pub use floating_toolbar::FloatingToolbar;
pub use pull_to_refresh_indicator::PullToRefreshIndicator;
pub use task_list::TaskListView;
pub use new_task_form::NewTaskForm;
pub use chat_panel::ChatPanel;
