//! Session Store
//!
//! Persists the bearer token in a browser cookie. The cookie-string logic is
//! kept in pure helpers so it can be unit tested off the browser.

use wasm_bindgen::JsCast;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "authToken";
/// Lifetime of a freshly issued credential, in days.
pub const AUTH_COOKIE_TTL_DAYS: f64 = 1.0;

/// Handle over the browser cookie jar holding the single session credential.
///
/// Held by the app controller and passed into gateway calls; nothing else
/// reads the cookie directly.
#[derive(Clone, Copy, Default)]
pub struct Session;

impl Session {
    /// Current credential, if one is stored and unexpired.
    pub fn get(&self) -> Option<String> {
        let cookies = html_document().cookie().ok()?;
        cookie_value(&cookies, AUTH_COOKIE)
    }

    /// Persist a credential for `ttl_days`. Empty credentials are ignored
    /// (a previously stored one survives).
    pub fn set(&self, credential: &str, ttl_days: f64) {
        let expires = expiry_utc_string(ttl_days);
        match build_set_cookie(AUTH_COOKIE, credential, &expires) {
            Some(cookie) => {
                web_sys::console::log_1(&format!("[SESSION] storing credential, expires {}", expires).into());
                let _ = html_document().set_cookie(&cookie);
            }
            None => {
                web_sys::console::warn_1(&"[SESSION] ignoring empty credential".into());
            }
        }
    }

    /// Drop the credential immediately, regardless of expiry.
    pub fn clear(&self) {
        web_sys::console::log_1(&"[SESSION] clearing credential".into());
        let _ = html_document().set_cookie(&build_clear_cookie(AUTH_COOKIE));
    }
}

fn html_document() -> web_sys::HtmlDocument {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document should exist")
        .unchecked_into::<web_sys::HtmlDocument>()
}

/// UTC expiry string `days` from now, for the cookie `expires` attribute.
fn expiry_utc_string(days: f64) -> String {
    let date = js_sys::Date::new_0();
    date.set_time(date.get_time() + days * 24.0 * 60.0 * 60.0 * 1000.0);
    date.to_utc_string().into()
}

/// Extract a cookie's value from a `document.cookie` string.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    let needle = format!("; {}=", name);
    let haystack = format!("; {}", cookies);
    let (_, rest) = haystack.split_once(&needle)?;
    let value = rest.split(';').next().unwrap_or("");
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Cookie assignment string for storing a credential, or None when the value
/// is empty (the empty-value guard).
fn build_set_cookie(name: &str, value: &str, expires_utc: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(format!(
        "{}={};expires={};path=/;SameSite=Lax",
        name, value, expires_utc
    ))
}

/// Cookie assignment string that removes the cookie immediately.
fn build_clear_cookie(name: &str) -> String {
    format!("{}=;Max-Age=0;path=/;SameSite=Lax", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_same_value() {
        let cookie = build_set_cookie(AUTH_COOKIE, "abc123", "Thu, 01 Jan 2026 00:00:00 GMT")
            .expect("non-empty credential should build a cookie");
        // The assignment's leading name=value pair is what the jar echoes back.
        let stored = cookie.split(';').next().unwrap();
        assert_eq!(cookie_value(stored, AUTH_COOKIE).as_deref(), Some("abc123"));
    }

    #[test]
    fn empty_credential_builds_nothing() {
        assert_eq!(
            build_set_cookie(AUTH_COOKIE, "", "Thu, 01 Jan 2026 00:00:00 GMT"),
            None
        );
    }

    #[test]
    fn cleared_cookie_reads_as_absent() {
        let cleared = build_clear_cookie(AUTH_COOKIE);
        let stored = cleared.split(';').next().unwrap();
        assert_eq!(cookie_value(stored, AUTH_COOKIE), None);
    }

    #[test]
    fn value_is_found_among_other_cookies() {
        let jar = "theme=dark; authToken=tok-42; lang=en";
        assert_eq!(cookie_value(jar, AUTH_COOKIE).as_deref(), Some("tok-42"));
    }

    #[test]
    fn absent_name_returns_none() {
        assert_eq!(cookie_value("theme=dark; lang=en", AUTH_COOKIE), None);
        assert_eq!(cookie_value("", AUTH_COOKIE), None);
    }

    #[test]
    fn name_prefix_does_not_match() {
        // "authTokenOld" must not satisfy a lookup for "authToken".
        assert_eq!(cookie_value("authTokenOld=stale", AUTH_COOKIE), None);
    }
}
