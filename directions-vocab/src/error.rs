//! Typed error for failed directions requests.

use crate::vocab::{ErrorStatus, FailureKind};

/// A directions request that did not produce a result.
///
/// Wraps the failed [`ErrorStatus`]; the message is the status description.
/// No request context is attached, callers add their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .status.description())]
pub struct DirectionsError {
    status: ErrorStatus,
}

impl DirectionsError {
    pub(crate) fn new(status: ErrorStatus) -> Self {
        debug_assert!(status.failed(), "OK is not an error");
        Self { status }
    }

    /// The status that caused this error.
    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    /// Whether the server or the client side produced this error.
    pub fn kind(&self) -> FailureKind {
        self.status.kind()
    }

    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        self.status.is_retryable()
    }
}

impl From<DirectionsError> for ErrorStatus {
    fn from(err: DirectionsError) -> Self {
        err.status
    }
}
