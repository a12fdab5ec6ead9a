//! Task Gateway
//!
//! REST bindings to the todo backend, organized by domain. Every call is a
//! single fetch with no retry, timeout, or cancellation; the bearer credential
//! is passed in explicitly by the caller.

mod auth;
mod tasks;

/// Backend base URL, fixed at compile time.
pub const API_URL: &str = "http://localhost:3000";

pub use auth::*;
pub use tasks::*;
