use leptos::html::Dialog;
use leptos::prelude::*;

use crate::features::kanban::components::{EditTaskModal, KanbanColumn};
use crate::features::kanban::hooks::use_task_store;
use crate::features::kanban::services::filter_tasks;
use crate::models::{Task, TaskPatch, TaskStatus};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_task_store();
    let tasks = store.tasks();
    let filter_query = store.filter_query();

    // Search narrows every column at once; an empty query shows the full board.
    let filtered = Memo::new(move |_| {
        tasks.with(|tasks| filter_query.with(|query| filter_tasks(tasks, query)))
    });

    // Track which task is being edited, and the dialog element that shows it
    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let open_edit = Callback::new(move |task: Task| {
        set_editing_task.set(Some(task));
        if let Some(dialog) = edit_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    view! {
        <div class="kanban-board">
            {TaskStatus::all()
                .into_iter()
                .map(|status| {
                    view! { <KanbanColumn status=status tasks=filtered on_edit=open_edit /> }
                })
                .collect::<Vec<_>>()}
        </div>

        // Edit modal only exists while a task is selected for editing
        {move || {
            editing_task.get().map(|task| {
                let apply_edit = Callback::new(move |(id, patch): (String, TaskPatch)| {
                    store.edit_task(&id, patch);
                });
                view! {
                    <EditTaskModal task=task on_edit=apply_edit dialog_ref=edit_dialog_ref />
                }
            })
        }}
    }
}
