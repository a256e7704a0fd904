use leptos::html::Dialog;
use leptos::prelude::*;

use crate::features::kanban::components::TaskModal;
use crate::features::kanban::hooks::use_task_store;
use crate::models::TaskStatus;

#[component]
pub fn KanbanHeader() -> impl IntoView {
    let store = use_task_store();
    let theme = store.theme();
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // Handler for the "Add Task" button to open the creation modal
    let open_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let create_task = Callback::new(move |(title, description, status): (String, String, TaskStatus)| {
        store.add_task(title, description, status);
    });

    view! {
        <header class="kanban-header">
            <div class="kanban-header-inner">
                <h1>"Kanban Task Board"</h1>
                <div class="kanban-actions">
                    <input
                        type="search"
                        class="search-input search-desktop"
                        placeholder="Search tasks..."
                        aria-label="Search tasks"
                        on:input=move |ev| store.set_filter_query(event_target_value(&ev))
                    />
                    <button
                        class="btn-secondary theme-btn"
                        title="Toggle theme"
                        aria-label="Toggle theme"
                        on:click=move |_| store.toggle_theme()
                    >
                        {move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263e}" }}
                    </button>
                    <button class="btn-primary" on:click=open_modal>"+ Add Task"</button>
                </div>
            </div>
            // Second search input shown below the title bar on narrow screens
            <div class="search-mobile">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search tasks..."
                    aria-label="Search tasks"
                    on:input=move |ev| store.set_filter_query(event_target_value(&ev))
                />
            </div>
        </header>

        <TaskModal on_create=create_task dialog_ref=dialog_ref />
    }
}
