pub mod board;
pub mod column;
pub mod edit_task_modal;
pub mod header;
pub mod task_card;
pub mod task_modal;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use edit_task_modal::EditTaskModal;
pub use header::KanbanHeader;
pub use task_card::TaskCard;
pub use task_modal::TaskModal;
