//! Logout coordination: end the session, then leave the page.

use shared_types::AppError;
use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// The external operation that ends the current session.
pub trait SessionTerminator {
    /// `Ok(true)` once the session is gone, `Ok(false)` when the backend
    /// declined, `Err` for transport or protocol failures.
    fn terminate(&self) -> impl Future<Output = Result<bool, AppError>>;
}

/// Liveness flag for the component that started a logout. Revoked on
/// unmount and checked after the await, before any follow-up work.
#[derive(Debug, Clone)]
pub struct MountToken(Rc<Cell<bool>>);

impl MountToken {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a logout attempt left the viewer where they were.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoutFailure {
    /// The backend answered but reported that the session was not ended.
    Rejected,
    Error(AppError),
}

impl LogoutFailure {
    pub fn user_message(&self) -> &'static str {
        "Logout failed. Please try again."
    }
}

impl fmt::Display for LogoutFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoutFailure::Rejected => write!(f, "auth backend declined to end the session"),
            LogoutFailure::Error(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    /// Session ended and the success navigation ran.
    LoggedOut,
    Failed(LogoutFailure),
    /// Another logout was still pending; nothing was done.
    AlreadyInFlight,
    /// The component unmounted before the result arrived; the result was
    /// dropped without touching any state.
    Abandoned,
}

/// Serializes logout attempts for one shell instance.
#[derive(Debug, Clone, Default)]
pub struct LogoutCoordinator {
    in_flight: Rc<Cell<bool>>,
}

/// Clears the in-flight flag when the attempt finishes or its task is
/// dropped mid-await.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl LogoutCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Terminate the session and, only on confirmed success, run
    /// `on_success` exactly once. Failures come back as values.
    pub async fn perform<T, F>(
        &self,
        terminator: &T,
        mount: &MountToken,
        on_success: F,
    ) -> LogoutOutcome
    where
        T: SessionTerminator,
        F: FnOnce(),
    {
        if self.in_flight.replace(true) {
            tracing::debug!("logout already in flight, ignoring repeat request");
            return LogoutOutcome::AlreadyInFlight;
        }

        let result = {
            let _in_flight = InFlight(&self.in_flight);
            terminator.terminate().await
        };

        if !mount.is_mounted() {
            tracing::debug!("shell unmounted before logout resolved, dropping result");
            return LogoutOutcome::Abandoned;
        }

        match result {
            Ok(true) => {
                tracing::info!("logout successful");
                on_success();
                LogoutOutcome::LoggedOut
            }
            Ok(false) => {
                let failure = LogoutFailure::Rejected;
                tracing::warn!(%failure, "logout failed");
                LogoutOutcome::Failed(failure)
            }
            Err(err) => {
                let failure = LogoutFailure::Error(err);
                tracing::warn!(%failure, "logout failed");
                LogoutOutcome::Failed(failure)
            }
        }
    }
}
