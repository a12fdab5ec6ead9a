//! Todo Frontend App
//!
//! Root component: owns the session, switches between the auth and task
//! views, and runs the fetch-and-replace cycle for the task collection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AuthView, NewTaskForm, TaskList};
use crate::context::AppContext;
use crate::session::Session;
use crate::store::{store_clear_tasks, store_replace_tasks, use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let session = Session::default();

    // State; auth is restored from the cookie on page load
    let (authenticated, set_authenticated) = signal(session.get().is_some());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(
        session,
        (authenticated, set_authenticated),
        (reload_trigger, set_reload_trigger),
    );
    provide_context(ctx);

    // Refetch the collection whenever the trigger bumps or auth flips.
    // Without a credential the call is skipped entirely.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if !ctx.authenticated.get() {
            return;
        }
        let Some(token) = ctx.session.get() else {
            return;
        };
        web_sys::console::log_1(&format!("[APP] fetching tasks, trigger={}", trigger).into());
        spawn_local(async move {
            match api::list_tasks(&token).await {
                Ok(tasks) => {
                    web_sys::console::log_1(&format!("[APP] loaded {} tasks", tasks.len()).into());
                    store_replace_tasks(&store, tasks);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] task fetch failed: {}", err).into());
                }
            }
        });
    });

    view! {
        <main class="app-layout">
            <h1>"Todos"</h1>
            <Show
                when=move || ctx.authenticated.get()
                fallback=|| view! { <AuthView /> }
            >
                <TaskView />
            </Show>
        </main>
    }
}

/// Task view: create form, the rendered collection, and logout.
#[component]
fn TaskView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let logout = move |_| {
        store_clear_tasks(&store);
        ctx.logout();
    };

    view! {
        <section class="todo-screen">
            <div class="toolbar">
                <button class="logout-btn" on:click=logout>"Logout"</button>
            </div>
            <NewTaskForm />
            <TaskList />
            <p class="task-count">{move || format!("{} tasks", store.tasks().get().len())}</p>
        </section>
    }
}
