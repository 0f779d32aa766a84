//! Domain models passed between the record store and the TUI. They stay plain
//! data holders so the store can focus on list bookkeeping and the UI on
//! presentation.

use std::fmt;

/// How far along the reader is with a book. `NotStarted` is the value the
/// input form falls back to whenever it is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ReadingStatus {
    /// Every status in picker order.
    pub const ALL: [ReadingStatus; 3] = [
        ReadingStatus::NotStarted,
        ReadingStatus::InProgress,
        ReadingStatus::Completed,
    ];

    /// Label shown in the status picker and the book table.
    pub fn label(self) -> &'static str {
        match self {
            ReadingStatus::NotStarted => "Not Started",
            ReadingStatus::InProgress => "In Progress",
            ReadingStatus::Completed => "Completed",
        }
    }

    /// Step forward through the picker, wrapping after `Completed`.
    pub fn next(self) -> Self {
        match self {
            ReadingStatus::NotStarted => ReadingStatus::InProgress,
            ReadingStatus::InProgress => ReadingStatus::Completed,
            ReadingStatus::Completed => ReadingStatus::NotStarted,
        }
    }

    /// Step backward through the picker, wrapping before `NotStarted`.
    pub fn previous(self) -> Self {
        match self {
            ReadingStatus::NotStarted => ReadingStatus::Completed,
            ReadingStatus::InProgress => ReadingStatus::NotStarted,
            ReadingStatus::Completed => ReadingStatus::InProgress,
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single book entry. Records carry no identifier: their position in the
/// library is the only handle the rest of the application has on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// Title shown in the first table column. Never empty once stored.
    pub title: String,
    /// Author shown next to the title. Never empty once stored.
    pub author: String,
    pub status: ReadingStatus,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>, status: ReadingStatus) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            status,
        }
    }

    /// Compose a `Title by Author` string for status messages.
    pub fn display_title(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_not_started() {
        assert_eq!(ReadingStatus::default(), ReadingStatus::NotStarted);
    }

    #[test]
    fn next_and_previous_cycle_through_every_status() {
        for status in ReadingStatus::ALL {
            assert_eq!(status.next().previous(), status);
            assert_eq!(status.next().next().next(), status);
        }
        assert_eq!(ReadingStatus::Completed.next(), ReadingStatus::NotStarted);
        assert_eq!(ReadingStatus::NotStarted.previous(), ReadingStatus::Completed);
    }

    #[test]
    fn labels_match_picker_text() {
        assert_eq!(ReadingStatus::InProgress.to_string(), "In Progress");
        assert_eq!(
            BookRecord::new("Dune", "Herbert", ReadingStatus::Completed).display_title(),
            "Dune by Herbert"
        );
    }
}
