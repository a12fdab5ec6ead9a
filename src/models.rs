//! Frontend Models
//!
//! Data structures matching the backend's JSON shapes.

use serde::Deserialize;

/// A single todo item as returned by the backend.
///
/// The backend's identifier field is `id` (its current schema; an older
/// revision used `_id`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Response body of POST /login. A missing token means the login was rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_full_shape() {
        let task: Task = serde_json::from_str(
            r#"{"id":"a1","title":"Buy milk","description":"2 liters","completed":true}"#,
        )
        .unwrap();
        assert_eq!(task.id, "a1");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description.as_deref(), Some("2 liters"));
        assert!(task.completed);
    }

    #[test]
    fn task_description_and_completed_are_optional() {
        let task: Task = serde_json::from_str(r#"{"id":"a2","title":"Call mom"}"#).unwrap();
        assert_eq!(task.description, None);
        assert!(!task.completed);
    }

    #[test]
    fn login_response_without_token_is_rejection() {
        let resp: LoginResponse = serde_json::from_str(r#"{"error":"bad credentials"}"#).unwrap();
        assert_eq!(resp.token, None);

        let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc123"));
    }
}
