//! New Task Form Component
//!
//! Creates a task, clears its fields, and triggers a collection refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateTaskBody};
use crate::components::input_value;
use crate::context::AppContext;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_title = title.get();
        if new_title.is_empty() {
            return;
        }
        let new_description = description.get();
        let Some(token) = ctx.session.get() else {
            return;
        };

        spawn_local(async move {
            let body = CreateTaskBody {
                title: &new_title,
                description: &new_description,
            };
            if let Err(err) = api::create_task(&token, &body).await {
                web_sys::console::error_1(&format!("[TASK] create failed: {}", err).into());
            } else {
                set_title.set(String::new());
                set_description.set(String::new());
            }
            // The refetch is the source of truth either way.
            ctx.reload();
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Task title..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(input_value(&ev))
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(input_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
