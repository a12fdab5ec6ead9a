//! Auth Endpoints
//!
//! Register and login; the only two calls issued without a credential.

use gloo_net::http::Request;
use serde::Serialize;

use crate::models::LoginResponse;
use super::API_URL;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// POST /register. Success is any 2xx; the body is ignored.
pub async fn register(username: &str, password: &str) -> Result<(), String> {
    let resp = Request::post(&format!("{}/register", API_URL))
        .json(&Credentials { username, password })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("register failed with status {}", resp.status()))
    }
}

/// POST /login. Returns the bearer token on success.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    let resp = Request::post(&format!("{}/login", API_URL))
        .json(&Credentials { username, password })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
    body.token.ok_or_else(|| "login rejected".to_string())
}
