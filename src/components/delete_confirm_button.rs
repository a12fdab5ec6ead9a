//! Delete Confirm Button Component
//!
//! Inline replacement for the blocking confirm() dialog: the first click arms
//! the button, the second one fires `on_confirm`.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show when=move || !armed.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this task?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
