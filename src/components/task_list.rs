//! Task List Component
//!
//! Renders the store's task collection. Each render is a deterministic
//! projection of the last successful fetch; rows are keyed on every mutable
//! field so any change rebuilds the row.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    // At most one row is in edit mode, tracked by task id.
    let (editing, set_editing) = signal::<Option<String>>(None);

    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().get()
                key=|task| {
                    (
                        task.id.clone(),
                        task.title.clone(),
                        task.description.clone(),
                        task.completed,
                    )
                }
                children=move |task| {
                    view! {
                        <TaskRow
                            task=task
                            editing=editing
                            set_editing=set_editing
                        />
                    }
                }
            />
        </ul>
    }
}
