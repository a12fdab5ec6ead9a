//! Task Row Component
//!
//! One entry of the rendered list: title, optional description, completion
//! styling, and the toggle/edit/delete controls. Edit mode swaps the display
//! for inline inputs pre-filled from the currently rendered values.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UpdateTaskBody};
use crate::components::{alert, input_value, DeleteConfirmButton};
use crate::context::AppContext;
use crate::models::Task;

#[component]
pub fn TaskRow(
    task: Task,
    editing: ReadSignal<Option<String>>,
    set_editing: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id.clone();
    let title = task.title.clone();
    let description = task.description.clone().unwrap_or_default();
    let completed = task.completed;

    // Edit buffers; seeded from the rendered values on entering edit mode,
    // never refetched.
    let (edit_title, set_edit_title) = signal(title.clone());
    let (edit_description, set_edit_description) = signal(description.clone());

    let is_editing = {
        let id = id.clone();
        move || editing.get().as_deref() == Some(id.as_str())
    };

    let toggle = {
        let id = id.clone();
        move |_| {
            let Some(token) = ctx.session.get() else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                let body = UpdateTaskBody::toggle_completed(completed);
                if let Err(err) = api::update_task(&token, &id, &body).await {
                    web_sys::console::error_1(&format!("[TASK] toggle failed: {}", err).into());
                }
                ctx.reload();
            });
        }
    };

    let enter_edit = {
        let id = id.clone();
        let title = title.clone();
        let description = description.clone();
        move |_| {
            set_edit_title.set(title.clone());
            set_edit_description.set(description.clone());
            set_editing.set(Some(id.clone()));
        }
    };

    let save_edit = {
        let id = id.clone();
        move |_| {
            let new_title = edit_title.get();
            if new_title.is_empty() {
                return;
            }
            let new_description = edit_description.get();
            let Some(token) = ctx.session.get() else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                let body = UpdateTaskBody {
                    title: Some(&new_title),
                    description: Some(&new_description),
                    completed: None,
                };
                match api::update_task(&token, &id, &body).await {
                    Ok(_) => {
                        set_editing.set(None);
                        ctx.reload();
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("[TASK] save failed: {}", err).into());
                        alert("Could not save task");
                    }
                }
            });
        }
    };

    // Cancel restores the display without contacting the backend.
    let cancel_edit = move |_| set_editing.set(None);

    let delete = {
        let id = id.clone();
        move |_| {
            let Some(token) = ctx.session.get() else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = api::delete_task(&token, &id).await {
                    web_sys::console::error_1(&format!("[TASK] delete failed: {}", err).into());
                }
                ctx.reload();
            });
        }
    };

    let row_class = if completed { "task-row completed" } else { "task-row" };
    let has_description = !description.is_empty();
    // Copy handle so the inner Show's children don't consume the string
    // from the outer children closure.
    let description_text = StoredValue::new(description.clone());
    let is_display = {
        let is_editing = is_editing.clone();
        move || !is_editing()
    };

    view! {
        <li class=row_class>
            <Show when=is_display>
                <span class="task-title"><strong>{title.clone()}</strong></span>
                <Show when=move || has_description>
                    <small class="task-description">{move || description_text.get_value()}</small>
                </Show>
                <div class="task-controls">
                    <button on:click=toggle.clone()>
                        {if completed { "Undo" } else { "Complete" }}
                    </button>
                    <button on:click=enter_edit.clone()>"Edit"</button>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        on_confirm=Callback::new(delete.clone())
                    />
                </div>
            </Show>
            <Show when=is_editing.clone()>
                <div class="task-edit">
                    <input
                        type="text"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(input_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Description (optional)"
                        prop:value=move || edit_description.get()
                        on:input=move |ev| set_edit_description.set(input_value(&ev))
                    />
                    <button on:click=save_edit.clone()>"Save"</button>
                    <button class="cancel-btn" on:click=cancel_edit>"Cancel"</button>
                </div>
            </Show>
        </li>
    }
}
