use leptos::prelude::*;

use crate::core::services::storage;
use crate::features::kanban::services as ops;
use crate::models::{Task, TaskPatch, TaskStatus, Theme};

/// Shared board state: the task collection, the search filter, and the theme
/// flag. Handed to components through Leptos context; signals make it `Copy`.
///
/// Every mutation re-serializes the whole collection to local storage. When
/// storage is unavailable the writes fail quietly and the session keeps
/// running on in-memory state.
#[derive(Clone, Copy)]
pub struct TaskStore {
    tasks: RwSignal<Vec<Task>>,
    filter_query: RwSignal<String>,
    theme: RwSignal<Theme>,
}

impl TaskStore {
    /// Rehydrate from local storage. Runs once, at mount; a missing or
    /// malformed payload yields an empty board and the default theme.
    fn load() -> Self {
        let theme = storage::load_theme().unwrap_or_else(preferred_theme);
        Self {
            tasks: RwSignal::new(storage::load_tasks()),
            filter_query: RwSignal::new(String::new()),
            theme: RwSignal::new(theme),
        }
    }

    pub fn tasks(&self) -> ReadSignal<Vec<Task>> {
        self.tasks.read_only()
    }

    pub fn filter_query(&self) -> ReadSignal<String> {
        self.filter_query.read_only()
    }

    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    /// Create a task from form input and prepend it to the board. The form
    /// guards against empty titles; the store takes what it is given.
    pub fn add_task(&self, title: String, description: String, status: TaskStatus) {
        self.tasks.update(|tasks| ops::add_task(tasks, title, description, status));
        self.persist();
    }

    /// Apply a partial patch to the matching task. Unknown ids are a no-op.
    pub fn edit_task(&self, id: &str, patch: TaskPatch) {
        self.tasks.update(|tasks| ops::edit_task(tasks, id, patch));
        self.persist();
    }

    pub fn delete_task(&self, id: &str) {
        self.tasks.update(|tasks| ops::delete_task(tasks, id));
        self.persist();
    }

    pub fn move_task_to_status(&self, id: &str, status: TaskStatus) {
        self.tasks.update(|tasks| ops::move_task_to_status(tasks, id, status));
        self.persist();
    }

    /// Drag-end entry point: the board hands over the dragged task id and the
    /// id of whatever the card was dropped on. Only drops on one of the three
    /// columns move the task; everything else is ignored.
    pub fn handle_drop(&self, task_id: &str, column_id: &str) {
        if let Some(status) = ops::resolve_drop_target(column_id) {
            self.move_task_to_status(task_id, status);
        }
    }

    pub fn set_filter_query(&self, query: String) {
        self.filter_query.set(query);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        storage::save_theme(next);
        apply_theme(next);
    }

    fn persist(&self) {
        self.tasks.with_untracked(|tasks| storage::save_tasks(tasks));
    }
}

/// Build the store, apply the initial theme to the document, and put the
/// store into context for the component tree.
pub fn provide_task_store() -> TaskStore {
    let store = TaskStore::load();
    apply_theme(store.theme.get_untracked());
    provide_context(store);
    store
}

pub fn use_task_store() -> TaskStore {
    use_context::<TaskStore>().expect("TaskStore context not provided")
}

/// Theme for first-time visitors, taken from the OS preference.
fn preferred_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Dark mode is driven by a `dark` class on the document root.
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = if theme.is_dark() {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}
