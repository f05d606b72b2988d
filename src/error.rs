//! Error types

use std::collections::TryReserveError;

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

/// Errors that can occur while renaming a desktop
#[derive(Debug, Error)]
pub enum Error {
    /// The X server could not be reached
    #[error("Can't open display: {0}")]
    Connect(#[from] ConnectError),

    /// The connection broke while talking to the X server
    #[error("X connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// The X server rejected a request
    #[error("X request failed: {0}")]
    Reply(#[from] ReplyError),

    /// A property is missing or has an unexpected shape
    #[error("Can't get {name}: {reason}")]
    PropertyUnavailable { name: String, reason: String },

    /// The new name contains a NUL byte and can't be stored in a name list
    #[error("Invalid name: names can't contain NUL bytes")]
    InvalidName,

    /// The edited list could not be allocated
    #[error("Failed to allocate memory")]
    OutOfMemory,
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

impl Error {
    pub(crate) fn unavailable(name: &str, reason: impl Into<String>) -> Self {
        Error::PropertyUnavailable {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
