//! Where zine text comes from.
//!
//! The page fetches exactly one document, from a fixed relative path, and does not start
//! parsing until the whole text has arrived.

use crate::error::FetchError;
use std::fs;
use std::path::PathBuf;

/// A place the zine text can be fetched from.
pub trait Source {
    /// Human-readable location, used in messages.
    fn location(&self) -> &str;

    /// Fetches the complete text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unavailable`] when the source can not be reached and
    /// [`FetchError::Rejected`] when it answers with something that is not zine text.
    fn fetch(&self) -> Result<String, FetchError>;
}

/// Zine text stored in a local file.
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    #[must_use]
    /// A source reading the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl Source for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<String, FetchError> {
        let unavailable = |source| FetchError::Unavailable {
            path: self.location.clone(),
            source,
        };

        let metadata = fs::metadata(&self.path).map_err(unavailable)?;
        if !metadata.is_file() {
            return Err(FetchError::Rejected {
                path: self.location.clone(),
                reason: "not a regular file".to_string(),
            });
        }

        let bytes = fs::read(&self.path).map_err(unavailable)?;
        String::from_utf8(bytes).map_err(|e| FetchError::Rejected {
            path: self.location.clone(),
            reason: format!("not valid UTF-8 ({e})"),
        })
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
