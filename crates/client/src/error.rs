//! Error taxonomy for backend requests.

use thiserror::Error;

/// A failed backend request.
///
/// Every failure surfaces to the caller immediately; there is no retry or
/// backoff in the client. Absent entities on read paths are `Ok(None)`, not
/// an error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// `message` is the `message` field of the JSON error body when one could
    /// be parsed, otherwise the transport status text. Displayed verbatim.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or the status text.
        message: String,
    },

    /// The backend answered with success but the body did not match the
    /// declared result type.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Status code of the response, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// True for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// True for a 409 response, the backend's signal for a slug
    /// uniqueness violation.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Status { status: 409, .. })
    }

    /// True for a 401 response.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}
