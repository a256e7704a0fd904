use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::TaskStatus;

#[component]
pub fn TaskModal(
    on_create: Callback<(String, String, TaskStatus)>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::ToDo);

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        // Empty-title guard lives here, at the form; the store accepts anything
        let trimmed = title.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            return;
        }

        on_create.run((
            trimmed,
            description.get_untracked().trim().to_string(),
            status.get_untracked(),
        ));

        // Reset form fields to empty state after successful submission
        set_title.set(String::new());
        set_description.set(String::new());
        set_status.set(TaskStatus::ToDo);

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Handler for closing the modal without submitting (cancel button or close X)
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Add New Task"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"\u{00d7}"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Title"</label>
                        <input
                            type="text"
                            placeholder="e.g., Design login screen"
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
                        <button type="submit" class="btn-primary">"Add Task"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
