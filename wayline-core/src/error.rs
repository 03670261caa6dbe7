//! Error types for Wayline.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`WaylineError`] - Top-level error type for all Wayline operations
//! - [`PathError`] - A string could not be used as a [`Path`](crate::Path)
//! - [`HistoryError`] - Errors from a history backend
//! - [`NavigationError`] - Errors while performing a navigation
//!
//! Selection never fails: an unmatched path, a malformed declaration, or a
//! duplicate path are all ordinary outcomes rather than errors.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Wayline operations.
#[derive(Error, Debug)]
pub enum WaylineError {
    /// A path failed validation.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// The history backend failed.
    #[error("history error: {0}")]
    History(#[from] HistoryError),

    /// A navigation could not be performed.
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors produced when validating a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path was empty.
    #[error("path is empty")]
    Empty,

    /// The path did not start with `/`.
    #[error("path must start with '/': {0:?}")]
    NotAbsolute(String),

    /// The path contained a control character.
    #[error("path contains a control character: {0:?}")]
    InvalidCharacter(String),
}

/// Errors reported by a [`History`](crate::History) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// The backing history object could not be reached.
    #[error("history is unavailable: {0}")]
    Unavailable(String),

    /// A pop listener has already been installed on this backend.
    #[error("a pop listener is already installed")]
    ListenerInstalled,

    /// The backend rejected the operation.
    #[error("history backend error: {0}")]
    Backend(String),
}

/// Errors that can occur while navigating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The navigation target is not a valid path.
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// The history backend refused the entry.
    #[error(transparent)]
    History(#[from] HistoryError),
}

// Convenience conversions
impl From<BoxError> for WaylineError {
    fn from(err: BoxError) -> Self {
        WaylineError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(PathError::Empty.to_string(), "path is empty");
        assert_eq!(
            PathError::NotAbsolute("about".into()).to_string(),
            "path must start with '/': \"about\""
        );
        assert_eq!(
            HistoryError::ListenerInstalled.to_string(),
            "a pop listener is already installed"
        );
    }

    #[test]
    fn test_navigation_error_is_transparent() {
        let err = NavigationError::from(PathError::Empty);
        assert_eq!(err.to_string(), "path is empty");

        let top = WaylineError::from(err);
        assert_eq!(top.to_string(), "navigation error: path is empty");
    }
}
