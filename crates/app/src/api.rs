//! HTTP client for the external auth backend.

use crate::logout::SessionTerminator;
use shared_types::{AppError, LogoutResponse, SessionUser, ShellConfig};

/// Origin used when the config holds a relative `api_base_url` and there
/// is no browser window to take the origin from.
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: resolve_base_url(&config.api_base_url, current_origin().as_deref()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch the signed-in viewer. `Ok(None)` means anonymous.
    pub async fn current_session(&self) -> Result<Option<SessionUser>, AppError> {
        let response = self
            .http
            .get(self.url("auth/me"))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        interpret_session(status, &body)
    }
}

impl SessionTerminator for AuthClient {
    async fn terminate(&self) -> Result<bool, AppError> {
        let response = self
            .http
            .post(self.url("auth/logout"))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        interpret_logout(status, &body)
    }
}

/// Turn an `api_base_url` into an absolute URL without a trailing slash.
fn resolve_base_url(api_base_url: &str, origin: Option<&str>) -> String {
    let trimmed = api_base_url.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    let origin = origin.unwrap_or(FALLBACK_ORIGIN).trim_end_matches('/');
    format!("{}/{}", origin, trimmed.trim_start_matches('/'))
}

#[cfg(feature = "web")]
fn current_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(feature = "web"))]
fn current_origin() -> Option<String> {
    None
}

fn error_from_body(status: u16, body: &str) -> AppError {
    AppError::from_server_error(body)
        .unwrap_or_else(|| AppError::from_status(status, format!("auth backend returned {status}")))
}

fn interpret_session(status: u16, body: &str) -> Result<Option<SessionUser>, AppError> {
    match status {
        204 | 401 => Ok(None),
        200..=299 if body.trim().is_empty() || body.trim() == "null" => Ok(None),
        200..=299 => Ok(Some(serde_json::from_str(body)?)),
        _ => Err(error_from_body(status, body)),
    }
}

fn interpret_logout(status: u16, body: &str) -> Result<bool, AppError> {
    match status {
        200..=299 if body.trim().is_empty() => Ok(true),
        200..=299 => Ok(serde_json::from_str::<LogoutResponse>(body)?.success),
        _ => Err(error_from_body(status, body)),
    }
}
