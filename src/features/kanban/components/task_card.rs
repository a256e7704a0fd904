use leptos::prelude::*;
use web_sys::DragEvent;

use crate::features::kanban::hooks::use_task_store;
use crate::models::Task;

#[component]
pub fn TaskCard(task: Task, on_edit: Callback<Task>) -> impl IntoView {
    let store = use_task_store();
    let (dragging, set_dragging) = signal(false);

    // Clones for the handlers that each need their own copy
    let id_for_drag = task.id.clone();
    let id_for_delete = task.id.clone();
    let task_for_edit = task.clone();

    let description = if task.description.is_empty() {
        "No description".to_string()
    } else {
        task.description.clone()
    };

    view! {
        <div
            class="task-card"
            class:dragging=move || dragging.get()
            class:no-description=task.description.is_empty()
            draggable="true"
            on:dragstart=move |ev: DragEvent| {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &id_for_drag);
                    dt.set_effect_allowed("move");
                }
                set_dragging.set(true);
            }
            on:dragend=move |_| set_dragging.set(false)
        >
            <div class="task-content">
                <h4>{task.title.clone()}</h4>
                <p>{description}</p>
            </div>
            <div class="task-actions">
                <button
                    class="task-action-btn edit-btn"
                    title="Edit task"
                    on:click=move |e| {
                        e.stop_propagation();
                        on_edit.run(task_for_edit.clone());
                    }
                >
                    "\u{270e}"
                </button>
                <button
                    class="task-action-btn delete-btn"
                    title="Delete task"
                    on:click=move |e| {
                        e.stop_propagation();
                        store.delete_task(&id_for_delete);
                    }
                >
                    "\u{1f5d1}"
                </button>
            </div>
        </div>
    }
}
