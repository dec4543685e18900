//! Custom error types for the agent bank client
//!
//! Every failure a call can surface is one of these variants; nothing in the
//! library retries, so each error reaches the immediate caller of the
//! operation that detected it.

use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the agent bank client
#[derive(Debug)]
pub enum Error {
    /// No API key configured; raised before any network activity
    ApiKeyNotSet,

    /// Network-level failure (connection, DNS, request timeout)
    Transport { reason: String },

    /// Server rejected the API key (HTTP 401)
    Authentication,

    /// Any other HTTP status in [400, 600)
    Server { status: u16, body: String },

    /// Well-formed response missing an expected field
    Protocol { reason: String },

    /// A request argument failed validation before any network activity
    Validation { field: String, reason: String },

    /// Failed to load or parse a configuration file
    Config { reason: String },

    /// Wait loop exceeded its deadline without a terminal status
    TaskTimedOut { task_id: String, timeout: Duration },

    /// Task reached FAILURE; carries the server-supplied error detail
    TaskFailed { task_id: String, detail: Value },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ApiKeyNotSet => {
                write!(f, "No API key set. Configure one before making calls.")
            }
            Error::Transport { reason } => {
                write!(f, "Request error: {}", reason)
            }
            Error::Authentication => {
                write!(f, "Invalid or missing API key.")
            }
            Error::Server { status, body } => {
                write!(f, "Error from server (status {}): {}", status, body)
            }
            Error::Protocol { reason } => {
                write!(f, "Protocol error: {}", reason)
            }
            Error::Validation { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            Error::Config { reason } => {
                write!(f, "Configuration error: {}", reason)
            }
            Error::TaskTimedOut { task_id, timeout } => {
                write!(
                    f,
                    "Task {} did not complete within {} seconds.",
                    task_id,
                    timeout.as_secs()
                )
            }
            Error::TaskFailed { task_id, detail } => {
                write!(f, "Task {} failed with error: {}", task_id, detail)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True for the two terminal task outcomes that are not transport-level
    pub fn is_task_error(&self) -> bool {
        matches!(
            self,
            Error::TaskTimedOut { .. } | Error::TaskFailed { .. }
        )
    }
}
