use leptos::prelude::*;

use crate::features::kanban::{provide_task_store, KanbanBoard, KanbanHeader};

#[component]
pub fn App() -> impl IntoView {
    // Build the store once, hydrated from local storage, and put it into
    // context for the whole component tree.
    provide_task_store();

    view! {
        <main class="app">
            <KanbanHeader />
            <KanbanBoard />
        </main>
    }
}
