pub mod use_tasks;

pub use use_tasks::{provide_task_store, use_task_store, TaskStore};
