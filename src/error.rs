//! Error types shared across the crate.
//!
//! Fetch failures are kept apart from everything else because they are the only failures a
//! reader ever sees: the page turns them into a message instead of propagating them.

use std::io;

#[derive(Debug, thiserror::Error)]
/// Failure to obtain the zine text from its source.
pub enum FetchError {
    /// The source could not be reached at all (missing or unreadable file).
    #[error("could not read {path}: {source}")]
    Unavailable {
        /// Location that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The source answered, but not with usable zine text.
    #[error("{path} was rejected: {reason}")]
    Rejected {
        /// Location that was requested.
        path: String,
        /// Why the response was not accepted.
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
/// Crate-level error.
pub enum Error {
    /// The zine text could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A configuration file exists but does not describe a valid configuration.
    #[error("invalid configuration in {path}: {message}")]
    Config {
        /// Configuration file path.
        path: String,
        /// Parser message.
        message: String,
    },
    /// The configured chapter tag pattern is not a valid regex.
    #[error("invalid chapter tag pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Reading or writing a local file failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// Serialising the navigation model failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
