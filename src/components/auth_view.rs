//! Auth View Component
//!
//! Login and register forms with a mode toggle. Login persists the returned
//! credential through the context; register alerts and switches to login.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, input_value};
use crate::context::AppContext;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn AuthView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (mode, set_mode) = signal(AuthMode::Login);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            return;
        }
        match mode.get() {
            AuthMode::Login => {
                spawn_local(async move {
                    match api::login(&user, &pass).await {
                        Ok(token) => ctx.login_with(&token),
                        Err(err) => {
                            web_sys::console::warn_1(&format!("[AUTH] login failed: {}", err).into());
                            alert("Login failed");
                        }
                    }
                });
            }
            AuthMode::Register => {
                spawn_local(async move {
                    match api::register(&user, &pass).await {
                        Ok(()) => {
                            alert("Account created! Now login.");
                            set_password.set(String::new());
                            set_mode.set(AuthMode::Login);
                        }
                        Err(err) => {
                            web_sys::console::warn_1(&format!("[AUTH] register failed: {}", err).into());
                            alert("Registration failed");
                        }
                    }
                });
            }
        }
    };

    view! {
        <section class="auth-screen">
            <h2>{move || match mode.get() {
                AuthMode::Login => "Login",
                AuthMode::Register => "Register",
            }}</h2>

            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(input_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(input_value(&ev))
                />
                <button type="submit">
                    {move || match mode.get() {
                        AuthMode::Login => "Login",
                        AuthMode::Register => "Create account",
                    }}
                </button>
            </form>

            <Show when=move || mode.get() == AuthMode::Login>
                <button class="link-btn" on:click=move |_| set_mode.set(AuthMode::Register)>
                    "Need an account? Register"
                </button>
            </Show>
            <Show when=move || mode.get() == AuthMode::Register>
                <button class="link-btn" on:click=move |_| set_mode.set(AuthMode::Login)>
                    "Have an account? Login"
                </button>
            </Show>
        </section>
    }
}
