//! Task Entity
//!
//! A scheduled or anytime task. Field names on the wire are camelCase.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use super::entity::Entity;

/// A task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (millisecond timestamp as a decimal string)
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Free-form duration label, e.g. "30分钟"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Task has no fixed time slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_anytime: Option<bool>,
}

/// Caller-supplied fields for a new task.
///
/// Every field is optional; an `id` in the body is ignored because
/// the identifier is always assigned server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub is_anytime: Option<bool>,
}

impl Task {
    /// Create a new incomplete task with no schedule
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            start_time: None,
            end_time: None,
            duration: None,
            is_anytime: None,
        }
    }

    /// Build a task from a draft, merging the caller's fields over the defaults
    pub fn from_draft(id: impl Into<String>, draft: TaskDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            completed: draft.completed.unwrap_or(false),
            start_time: draft.start_time,
            end_time: draft.end_time,
            duration: draft.duration,
            is_anytime: draft.is_anytime,
        }
    }

    /// Scheduled for a time slot (start and end both set)
    pub fn with_slot(mut self, start: &str, end: &str, duration: &str) -> Self {
        self.start_time = Some(start.to_string());
        self.end_time = Some(end.to_string());
        self.duration = Some(duration.to_string());
        self.is_anytime = Some(false);
        self
    }

    /// Flexible task without a fixed slot
    pub fn anytime(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self.is_anytime = Some(true);
        self
    }
}

impl Entity for Task {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Issues timestamp-derived task ids.
///
/// Ids are the current Unix time in milliseconds. Two ids issued in the
/// same millisecond are kept distinct by bumping the later one, so ids
/// from one source are strictly increasing.
#[derive(Debug, Default)]
pub struct TaskIdSource {
    last: AtomicI64,
}

impl TaskIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the wall clock
    pub fn next_id(&self) -> String {
        self.next_id_at(chrono::Utc::now().timestamp_millis())
    }

    /// Next id for a given clock reading (millis)
    pub fn next_id_at(&self, now_millis: i64) -> String {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(prev + 1);
            match self.last.compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Relaxed) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Placeholder tasks for the mock store
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("1", "晨间阅读").with_slot("07:30", "08:00", "30分钟"),
        Task::new("2", "整理周报").with_slot("10:00", "11:00", "1小时"),
        Task::new("3", "给家里打电话").anytime("15分钟"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("42", "Test task");
        assert_eq!(task.id(), "42");
        assert_eq!(task.title, "Test task");
        assert!(!task.completed);
        assert!(task.start_time.is_none());
    }

    #[test]
    fn test_from_draft_defaults_to_incomplete() {
        let draft = TaskDraft {
            title: "x".to_string(),
            ..Default::default()
        };
        let task = Task::from_draft("1", draft);
        assert_eq!(task.title, "x");
        assert!(!task.completed);
        assert!(task.is_anytime.is_none());
    }

    #[test]
    fn test_draft_ignores_caller_id() {
        let draft: TaskDraft =
            serde_json::from_str(r#"{"id":"evil","title":"x","isAnytime":true}"#).unwrap();
        let task = Task::from_draft("100", draft);
        assert_eq!(task.id, "100");
        assert_eq!(task.is_anytime, Some(true));
    }

    #[test]
    fn test_task_serializes_camel_case_and_skips_none() {
        let task = Task::new("1", "a").with_slot("09:00", "10:00", "1小时");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "10:00");
        assert_eq!(json["isAnytime"], false);

        let bare = serde_json::to_value(Task::new("2", "b")).unwrap();
        let obj = bare.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(!obj.contains_key("duration"));
    }

    #[test]
    fn test_id_source_uses_clock() {
        let ids = TaskIdSource::new();
        assert_eq!(ids.next_id_at(1_700_000_000_000), "1700000000000");
        assert_eq!(ids.next_id_at(1_700_000_000_500), "1700000000500");
    }

    #[test]
    fn test_id_source_bumps_same_millisecond() {
        let ids = TaskIdSource::new();
        let a = ids.next_id_at(1_000);
        let b = ids.next_id_at(1_000);
        let c = ids.next_id_at(999);
        assert_eq!(a, "1000");
        assert_eq!(b, "1001");
        assert_eq!(c, "1002");
    }

    #[test]
    fn test_seed_tasks_have_unique_ids() {
        let seeds = seed_tasks();
        assert_eq!(seeds.len(), 3);
        let mut ids: Vec<_> = seeds.iter().map(|t| t.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
