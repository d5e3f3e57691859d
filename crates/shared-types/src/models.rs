use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization category carried by a session.
///
/// The set is open: anything the auth backend sends that is not one of the
/// known roles is kept verbatim in `Other` and treated like `User` for
/// routing purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
    Verifier,
    Other(String),
}

impl Role {
    /// Parse from the backend's `role` field. Case and surrounding
    /// whitespace are ignored.
    pub fn from_claim(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "user" => Role::User,
            "admin" => Role::Admin,
            "verifier" => Role::Verifier,
            _ => Role::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Verifier => "verifier",
            Role::Other(raw) => raw,
        }
    }

    /// True for values outside the known role set.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Role::Other(_))
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_claim(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated viewer as returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

/// Result body of the logout endpoint. Backends that reply with an empty
/// 2xx body are treated as `success = true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoutResponse {
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}
