//! UI Components
//!
//! Reusable Leptos components.

mod auth_view;
mod task_form;
mod task_list;
mod task_row;
mod delete_confirm_button;

pub use auth_view::AuthView;
pub use task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use delete_confirm_button::DeleteConfirmButton;

/// Blocking modal alert, the only user-facing error channel.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Read the current value of the input that fired an event.
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
