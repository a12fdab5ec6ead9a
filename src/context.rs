//! Application Context
//!
//! Shared state provided via Leptos Context API. Holds the session handle so
//! gateway calls receive the credential explicitly instead of reading the
//! cookie ad hoc.

use leptos::prelude::*;

use crate::session::{Session, AUTH_COOKIE_TTL_DAYS};

/// App-wide signals and the session handle, provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Cookie-backed credential store
    pub session: Session,
    /// Whether a credential is present - read
    pub authenticated: ReadSignal<bool>,
    set_authenticated: WriteSignal<bool>,
    /// Trigger to refetch the task collection - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        session: Session,
        authenticated: (ReadSignal<bool>, WriteSignal<bool>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            session,
            authenticated: authenticated.0,
            set_authenticated: authenticated.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a full collection refetch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Persist a fresh credential and switch to the task view. The reload
    /// effect picks up the auth flip and issues the first list fetch.
    pub fn login_with(&self, token: &str) {
        self.session.set(token, AUTH_COOKIE_TTL_DAYS);
        self.set_authenticated.set(true);
        self.reload();
    }

    /// Drop the credential and switch back to the auth view.
    pub fn logout(&self) {
        self.session.clear();
        self.set_authenticated.set(false);
    }
}
