//! Task Endpoints
//!
//! CRUD calls against /todos, each carrying the bearer credential.

use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;

use crate::models::Task;
use super::API_URL;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
pub struct CreateTaskBody<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Serialize, Default)]
pub struct UpdateTaskBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl<'a> UpdateTaskBody<'a> {
    /// Body that inverts a task's completion flag and nothing else.
    pub fn toggle_completed(current: bool) -> Self {
        Self {
            completed: Some(!current),
            ..Default::default()
        }
    }
}

fn bearer(req: RequestBuilder, token: &str) -> RequestBuilder {
    req.header("Authorization", &format!("Bearer {}", token))
}

// ========================
// Calls
// ========================

/// GET /todos. The full collection; callers replace their copy wholesale.
pub async fn list_tasks(token: &str) -> Result<Vec<Task>, String> {
    let resp = bearer(Request::get(&format!("{}/todos", API_URL)), token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("list failed with status {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// POST /todos. The created task in the response is ignored; the caller
/// refetches the collection instead.
pub async fn create_task(token: &str, body: &CreateTaskBody<'_>) -> Result<(), String> {
    let _ = bearer(Request::post(&format!("{}/todos", API_URL)), token)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// PUT /todos/:id. Non-success is an error so edit-save can surface it.
pub async fn update_task(token: &str, id: &str, body: &UpdateTaskBody<'_>) -> Result<Task, String> {
    let resp = bearer(Request::put(&format!("{}/todos/{}", API_URL, id)), token)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("update failed with status {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// DELETE /todos/:id. Status is not checked; the follow-up refetch is the
/// source of truth.
pub async fn delete_task(token: &str, id: &str) -> Result<(), String> {
    let _ = bearer(Request::delete(&format!("{}/todos/{}", API_URL, id)), token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_body_carries_only_completed() {
        let body = UpdateTaskBody::toggle_completed(false);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"completed":true}"#
        );

        let body = UpdateTaskBody::toggle_completed(true);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"completed":false}"#
        );
    }

    #[test]
    fn edit_body_skips_absent_fields() {
        let body = UpdateTaskBody {
            title: Some("New title"),
            description: Some(""),
            completed: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"title":"New title","description":""}"#
        );
    }

    #[test]
    fn create_body_always_carries_both_fields() {
        let body = CreateTaskBody {
            title: "Buy milk",
            description: "",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"title":"Buy milk","description":""}"#
        );
    }
}
