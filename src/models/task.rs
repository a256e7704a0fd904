use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Column label shown in the board header.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Stable key used for drop-target ids and the persisted payload.
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_key(key: &str) -> Option<TaskStatus> {
        match key {
            "todo" => Some(TaskStatus::ToDo),
            "inprogress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]
    }
}

/// A single card on the board. The serialized form is the persisted payload:
/// camelCase keys, lowercase status, millisecond timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String, description: String, status: TaskStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial patch applied by the edit operation; absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_with_equal_timestamps() {
        let task = Task::new("a".into(), String::new(), TaskStatus::ToDo);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.status, TaskStatus::ToDo);
    }

    #[test]
    fn status_key_round_trips() {
        for status in TaskStatus::all() {
            assert_eq!(TaskStatus::from_key(status.key()), Some(status));
        }
        assert_eq!(TaskStatus::from_key("archived"), None);
        assert_eq!(TaskStatus::from_key(""), None);
    }

    #[test]
    fn wire_format_uses_camel_case_and_millisecond_timestamps() {
        let task = Task::new("Write docs".into(), "intro page".into(), TaskStatus::InProgress);
        let value = serde_json::to_value(&task).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["status"], "inprogress");
        assert_eq!(obj["title"], "Write docs");
        assert_eq!(obj["createdAt"].as_i64(), Some(task.created_at.timestamp_millis()));
        assert_eq!(obj["updatedAt"].as_i64(), Some(task.updated_at.timestamp_millis()));
    }

    #[test]
    fn collection_round_trip_preserves_ids_fields_and_order() {
        let tasks = vec![
            Task::new("first".into(), "one".into(), TaskStatus::Done),
            Task::new("second".into(), String::new(), TaskStatus::ToDo),
        ];
        let json = serde_json::to_string(&tasks).unwrap();
        let reloaded: Vec<Task> = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded.len(), tasks.len());
        for (a, b) in tasks.iter().zip(&reloaded) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.description, b.description);
            assert_eq!(a.status, b.status);
            // Timestamps survive at millisecond precision.
            assert_eq!(a.created_at.timestamp_millis(), b.created_at.timestamp_millis());
            assert_eq!(a.updated_at.timestamp_millis(), b.updated_at.timestamp_millis());
        }
    }
}
