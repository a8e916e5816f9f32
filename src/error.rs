//! Error type shared by the facade and the logger registry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A symbolic level did not name any known severity. Carries the input as given.
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}

pub type Result<T> = std::result::Result<T, Error>;
