use leptos::prelude::*;
use web_sys::DragEvent;

use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::use_task_store;
use crate::models::{Task, TaskStatus};

/// Pull the dragged task id out of the drop event, if the drag set one.
fn dragged_task_id(ev: &DragEvent) -> Option<String> {
    ev.data_transfer()
        .and_then(|dt| dt.get_data("text/plain").ok())
        .filter(|id| !id.is_empty())
}

// dragenter/dragleave fire again for every child crossed inside the dropzone,
// so the highlight is driven by a nesting depth rather than a flag.
fn drag_enter(depth: i32) -> i32 {
    depth + 1
}

fn drag_leave(depth: i32) -> i32 {
    (depth - 1).max(0)
}

#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    tasks: Memo<Vec<Task>>,
    on_edit: Callback<Task>,
) -> impl IntoView {
    let store = use_task_store();
    let (drag_depth, set_drag_depth) = signal(0i32);

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                // Reactive task count - updates automatically when tasks change
                <span class="task-count">
                    {move || {
                        tasks.with(|tasks| tasks.iter().filter(|t| t.status == status).count())
                    }}
                </span>
            </div>
            <div
                class="column-content"
                class:drag-over={move || drag_depth.get() > 0}
                aria-label=format!("{} column dropzone", status.as_str())
                on:dragenter=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_depth.update(|d| *d = drag_enter(*d));
                }
                on:dragover=move |ev: DragEvent| {
                    // Required, otherwise the browser refuses the drop
                    ev.prevent_default();
                }
                on:dragleave=move |_| set_drag_depth.update(|d| *d = drag_leave(*d))
                on:drop=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_depth.set(0);
                    if let Some(task_id) = dragged_task_id(&ev) {
                        store.handle_drop(&task_id, status.key());
                    }
                }
            >
                {move || {
                    tasks
                        .with(|tasks| {
                            tasks
                                .iter()
                                .filter(|t| t.status == status)
                                .cloned()
                                .map(|task| view! { <TaskCard task=task on_edit=on_edit /> })
                                .collect::<Vec<_>>()
                        })
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_survives_crossing_a_child_card() {
        // Pointer enters the column, then a card inside it: the card's
        // dragleave for the column content must not drop the highlight.
        let mut depth = 0;
        depth = drag_enter(depth); // into the column
        depth = drag_enter(depth); // into a card
        depth = drag_leave(depth); // out of the card
        assert!(depth > 0);

        depth = drag_leave(depth); // out of the column
        assert_eq!(depth, 0);
    }

    #[test]
    fn stray_leave_never_goes_negative() {
        assert_eq!(drag_leave(0), 0);
    }
}
