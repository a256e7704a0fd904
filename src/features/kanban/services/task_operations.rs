use chrono::Utc;

use crate::models::{Task, TaskPatch, TaskStatus};

// Collection operations behind the task store. These work on plain vectors so
// the board semantics stay testable off the wasm target; the store wraps them
// with signal updates and persistence.

/// Build a task from form input and prepend it, newest first.
pub fn add_task(tasks: &mut Vec<Task>, title: String, description: String, status: TaskStatus) {
    tasks.insert(0, Task::new(title, description, status));
}

/// Merge a partial patch into the matching task and bump `updated_at`.
/// Unknown ids are a no-op. `id` and `created_at` are never touched.
pub fn edit_task(tasks: &mut [Task], id: &str, patch: TaskPatch) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = Utc::now();
    }
}

/// Remove the matching task; no-op when absent.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) {
    tasks.retain(|t| t.id != id);
}

/// Set the task's status and bump `updated_at`. No check that the status
/// actually changed, so repeating a move is harmless.
pub fn move_task_to_status(tasks: &mut [Task], id: &str, status: TaskStatus) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.status = status;
        task.updated_at = Utc::now();
    }
}

/// Case-insensitive substring filter over title and description.
/// A blank query returns the collection unchanged, in order.
pub fn filter_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&q) || t.description.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

/// Resolve a drop-target id to a column. Drops on anything that is not one of
/// the three known columns are ignored by the caller.
pub fn resolve_drop_target(column_id: &str) -> Option<TaskStatus> {
    TaskStatus::from_key(column_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn board_with(titles: &[(&str, &str, TaskStatus)]) -> Vec<Task> {
        titles
            .iter()
            .map(|(title, desc, status)| Task::new(title.to_string(), desc.to_string(), *status))
            .collect()
    }

    #[test]
    fn add_prepends_one_task_with_requested_status() {
        let mut tasks = board_with(&[("existing", "", TaskStatus::ToDo)]);

        add_task(&mut tasks, "new".into(), "details".into(), TaskStatus::Done);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "new");
        assert_eq!(tasks[0].status, TaskStatus::Done);
        assert_eq!(tasks[1].title, "existing");
    }

    #[test]
    fn delete_removes_the_id_and_ignores_unknown_ids() {
        let mut tasks = board_with(&[("a", "", TaskStatus::ToDo), ("b", "", TaskStatus::Done)]);
        let id = tasks[0].id.clone();

        delete_task(&mut tasks, &id);
        assert_eq!(tasks.len(), 1);
        assert!(!tasks.iter().any(|t| t.id == id));

        delete_task(&mut tasks, "no-such-id");
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn edit_merges_fields_and_preserves_id_and_created_at() {
        let mut tasks = board_with(&[("old title", "old desc", TaskStatus::ToDo)]);
        let before = tasks[0].clone();

        // Utc::now() has sub-millisecond resolution but keep a margin anyway.
        sleep(Duration::from_millis(2));
        edit_task(
            &mut tasks,
            &before.id,
            TaskPatch {
                title: Some("new title".into()),
                status: Some(TaskStatus::InProgress),
                ..TaskPatch::default()
            },
        );

        let after = &tasks[0];
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.title, "new title");
        assert_eq!(after.description, "old desc");
        assert_eq!(after.status, TaskStatus::InProgress);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn edit_with_unknown_id_changes_nothing() {
        let mut tasks = board_with(&[("a", "", TaskStatus::ToDo)]);
        let snapshot = tasks.clone();

        edit_task(&mut tasks, "missing", TaskPatch { title: Some("x".into()), ..TaskPatch::default() });

        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn move_is_idempotent_on_status() {
        let mut tasks = board_with(&[("a", "", TaskStatus::ToDo)]);
        let id = tasks[0].id.clone();

        move_task_to_status(&mut tasks, &id, TaskStatus::Done);
        assert_eq!(tasks[0].status, TaskStatus::Done);

        move_task_to_status(&mut tasks, &id, TaskStatus::Done);
        assert_eq!(tasks[0].status, TaskStatus::Done);
    }

    #[test]
    fn filter_matches_title_or_description_case_insensitively() {
        let tasks = board_with(&[
            ("Design login screen", "mockups", TaskStatus::ToDo),
            ("Fix parser", "handles LOGIN tokens", TaskStatus::InProgress),
            ("Ship release", "", TaskStatus::Done),
        ]);

        let hits = filter_tasks(&tasks, "login");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Design login screen");
        assert_eq!(hits[1].title, "Fix parser");

        assert!(filter_tasks(&tasks, "deploy").is_empty());
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let tasks = board_with(&[
            ("a", "", TaskStatus::ToDo),
            ("b", "", TaskStatus::Done),
        ]);

        assert_eq!(filter_tasks(&tasks, ""), tasks);
        assert_eq!(filter_tasks(&tasks, "   "), tasks);
    }

    #[test]
    fn drop_targets_are_exactly_the_three_columns() {
        assert_eq!(resolve_drop_target("todo"), Some(TaskStatus::ToDo));
        assert_eq!(resolve_drop_target("inprogress"), Some(TaskStatus::InProgress));
        assert_eq!(resolve_drop_target("done"), Some(TaskStatus::Done));
        assert_eq!(resolve_drop_target("trash"), None);
        assert_eq!(resolve_drop_target("To Do"), None);
        assert_eq!(resolve_drop_target(""), None);
    }
}
