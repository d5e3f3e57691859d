use dioxus::prelude::*;
use shared_types::{Role, SessionUser};

/// Session state shared through context. Written by the session bootstrap
/// and by logout; everything else only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn set_user(&mut self, user: SessionUser) {
        if user.role.is_unrecognized() {
            tracing::warn!(
                user_id = %user.id,
                role = %user.role,
                "session carries an unrecognized role, routing as a regular user"
            );
        }
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    /// Role of the current viewer; `None` when anonymous.
    pub fn role(&self) -> Option<Role> {
        self.current_user.read().as_ref().map(|u| u.role.clone())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook returning the viewer's role, re-rendering when the session changes.
pub fn use_role() -> Option<Role> {
    use_auth().role()
}
