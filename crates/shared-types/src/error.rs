use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    Unauthorized,
    Network,
    Config,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Config => write!(f, "Config"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the shell and the auth backend's JSON bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Config, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Map an HTTP status returned by the auth backend onto an error kind.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 | 422 => AppErrorKind::BadRequest,
            401 | 403 => AppErrorKind::Unauthorized,
            404 => AppErrorKind::NotFound,
            _ => AppErrorKind::InternalError,
        };
        Self::new(kind, message)
    }

    /// Parse an AppError out of a backend response body.
    ///
    /// Accepts the raw JSON object or a message that embeds it, e.g.
    ///   `logout failed: {"kind":"Unauthorized","message":"Session expired"}`
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::bad_request(format!("Malformed response body: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_server_error_parses_raw_json() {
        let json = r#"{"kind":"Unauthorized","message":"Session expired"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Session expired");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"logout failed: {"kind":"Network","message":"offline"} (status 503)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::Network);
        assert_eq!(err.message, "offline");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
        assert!(AppError::from_server_error("} backwards {").is_none());
    }

    #[test]
    fn from_status_maps_auth_failures() {
        assert_eq!(AppError::from_status(401, "").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(403, "").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(404, "").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::from_status(422, "").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::from_status(503, "").kind, AppErrorKind::InternalError);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::network("connection reset");
        assert_eq!(format!("{}", err), "Network: connection reset");
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let err: AppError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert_eq!(err.kind, AppErrorKind::Config);
    }
}
