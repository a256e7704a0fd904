use gloo_storage::{LocalStorage, Storage};

use crate::models::{Task, Theme};

const TASKS_KEY: &str = "kanban_tasks_v1";
const THEME_KEY: &str = "kanban_theme_v1";

// Load the task collection from local storage.
// A missing key, unavailable storage, or malformed payload all land in the
// same place: an empty board for this session.
pub fn load_tasks() -> Vec<Task> {
    match LocalStorage::get::<Vec<Task>>(TASKS_KEY) {
        Ok(tasks) => tasks,
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Vec::new(),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load tasks from storage: {}", e).into());
            Vec::new()
        }
    }
}

// Save the full task collection to local storage.
// Failures (quota, serialization, storage unavailable) are logged and
// swallowed; in-memory state stays the source of truth for the session.
pub fn save_tasks(tasks: &[Task]) {
    if let Err(e) = LocalStorage::set(TASKS_KEY, tasks) {
        web_sys::console::error_1(&format!("Failed to save tasks to storage: {}", e).into());
    }
}

// Load the persisted theme, if one was ever saved.
pub fn load_theme() -> Option<Theme> {
    LocalStorage::get::<Theme>(THEME_KEY).ok()
}

pub fn save_theme(theme: Theme) {
    if let Err(e) = LocalStorage::set(THEME_KEY, theme) {
        web_sys::console::error_1(&format!("Failed to save theme to storage: {}", e).into());
    }
}
