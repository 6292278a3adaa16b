//! Error taxonomy for the Vimeo API client
//!
//! HTTP variants carry the status classification the calling operation
//! declared. A status outside both the operation's success set and its
//! declared error set surfaces as [`ClientError::UnexpectedStatus`], so
//! callers can tell a documented API failure from an undocumented one.

use crate::http::{Method, TransportError};

/// Errors surfaced by the client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Constructed with neither a token nor a key/secret pair
    #[error("client configuration requires a token or a key/secret pair")]
    BadConfiguration,

    /// A resource operation was wired to a verb this client does not allow
    #[error("HTTP method {0} is not enabled for this client")]
    MethodNotImplemented(Method),

    #[error("not modified (304) at {url}: {message}")]
    NotModified { message: String, url: String },

    #[error("bad request (400) at {url}: {message}")]
    BadRequest { message: String, url: String },

    #[error("unauthorized (401) at {url}: {message}")]
    Unauthorized { message: String, url: String },

    #[error("forbidden (403) at {url}: {message}")]
    Forbidden { message: String, url: String },

    #[error("not found (404) at {url}: {message}")]
    NotFound { message: String, url: String },

    /// Status outside both the success set and the declared error set
    #[error("unexpected HTTP status {status} at {url}: {message}")]
    UnexpectedStatus {
        status: u16,
        message: String,
        url: String,
    },

    /// The transport failed before producing an HTTP status
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Maps a status the operation declared as a known failure to its
    /// variant. Declared-but-unmapped codes fall through to
    /// [`ClientError::UnexpectedStatus`].
    pub(crate) fn from_status(status: u16, message: String, url: String) -> Self {
        match status {
            304 => ClientError::NotModified { message, url },
            400 => ClientError::BadRequest { message, url },
            401 => ClientError::Unauthorized { message, url },
            403 => ClientError::Forbidden { message, url },
            404 => ClientError::NotFound { message, url },
            _ => ClientError::UnexpectedStatus {
                status,
                message,
                url,
            },
        }
    }

    /// HTTP status code this error classifies, where one applies
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotModified { .. } => Some(304),
            ClientError::BadRequest { .. } => Some(400),
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Forbidden { .. } => Some(403),
            ClientError::NotFound { .. } => Some(404),
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL of the failed request, where one applies
    pub fn url(&self) -> Option<&str> {
        match self {
            ClientError::NotModified { url, .. }
            | ClientError::BadRequest { url, .. }
            | ClientError::Unauthorized { url, .. }
            | ClientError::Forbidden { url, .. }
            | ClientError::NotFound { url, .. }
            | ClientError::UnexpectedStatus { url, .. } => Some(url),
            _ => None,
        }
    }
}
