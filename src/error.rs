//! Client error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while talking to the game service.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ClientErrorKind {
    /// Network failure, timeout, or a non-success HTTP status.
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The service answered, but the body was not the expected shape.
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
}

/// Game service error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Client error: {} at {}:{}", kind, file, line)]
pub struct ClientError {
    /// Error classification.
    pub kind: ClientErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: ClientErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates a transport failure.
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Transport(message.into()))
    }

    /// Creates a malformed-response failure.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::MalformedResponse(message.into()))
    }

    /// True for network/server failures.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ClientErrorKind::Transport(_))
    }

    /// True when the response body could not be interpreted.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ClientErrorKind::MalformedResponse(_))
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::transport(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("JSON error: {}", err))
    }
}
