use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::{Task, TaskPatch, TaskStatus};

#[component]
pub fn EditTaskModal(
    task: Task,
    on_edit: Callback<(String, TaskPatch)>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());
    let (status, set_status) = signal(task.status);

    let task_id = task.id.clone();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let trimmed = title.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            return;
        }

        on_edit.run((
            task_id.clone(),
            TaskPatch {
                title: Some(trimmed),
                description: Some(description.get_untracked().trim().to_string()),
                status: Some(status.get_untracked()),
            },
        ));

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Closing without saving puts the fields back to the task's current values
    let close_modal = {
        let original_title = task.title.clone();
        let original_description = task.description.clone();
        let original_status = task.status;
        move |_| {
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
            set_title.set(original_title.clone());
            set_description.set(original_description.clone());
            set_status.set(original_status);
        }
    };
    let close_modal_x = close_modal.clone();

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Edit Task"</h3>
                    <button type="button" class="modal-close" on:click=close_modal_x>"\u{00d7}"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Title"</label>
                        <input
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Description"</label>
                        <textarea
                            placeholder="Optional details..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            on:change=move |ev| {
                                if let Some(s) = TaskStatus::from_key(&event_target_value(&ev)) {
                                    set_status.set(s);
                                }
                            }
                            prop:value=move || status.get().key().to_string()
                        >
                            {TaskStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.key()>{s.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Save Changes"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
