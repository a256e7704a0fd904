pub mod task;
pub mod theme;

// Export the Task and TaskStatus types for use throughout the app
pub use task::{Task, TaskPatch, TaskStatus};
pub use theme::Theme;
