//! Errors the library reports back to the user as blocking notices.

use std::fmt;

use thiserror::Error;

/// Operations that need a selected book before they can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Edit,
    Delete,
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordAction::Edit => f.write_str("edit"),
            RecordAction::Delete => f.write_str("delete"),
        }
    }
}

/// User-facing failures of a library mutation. Both variants are recoverable:
/// the operation is aborted and the library is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Please provide both title and author.")]
    Validation,
    #[error("Please select a book to {action}.")]
    Selection { action: RecordAction },
}

impl LibraryError {
    /// Heading used for the blocking notice popup.
    pub fn heading(&self) -> &'static str {
        match self {
            LibraryError::Validation => "Input Error",
            LibraryError::Selection { .. } => "Selection Error",
        }
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;
