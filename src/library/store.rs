//! The record store: an ordered, session-only list of books.
//!
//! Every mutation checks its preconditions before touching the list, so a
//! rejected call leaves the store exactly as it was. After each successful
//! change the attached [`LibraryObserver`] receives the whole list and
//! rebuilds itself, which keeps any view in lockstep with the records
//! without incremental bookkeeping.

use log::debug;

use crate::models::{BookRecord, ReadingStatus};

use super::error::{LibraryError, LibraryResult, RecordAction};

/// Receives the full record list whenever the library changes. Implementors
/// rebuild their whole representation from the slice instead of patching it.
pub trait LibraryObserver {
    fn refresh(&mut self, records: &[BookRecord]);
}

/// Observer that ignores every refresh, for callers that only need the list.
impl LibraryObserver for () {
    fn refresh(&mut self, _records: &[BookRecord]) {}
}

/// Ordered, in-memory list of books. Insertion order is display order and a
/// record's index is the only handle callers get on it.
///
/// The observer is refreshed once on construction and after every successful
/// mutation. Failed operations leave both the list and the observer alone.
pub struct Library<O: LibraryObserver> {
    records: Vec<BookRecord>,
    observer: O,
}

impl<O: LibraryObserver> Library<O> {
    pub fn new(observer: O) -> Self {
        let mut library = Self {
            records: Vec::new(),
            observer,
        };
        library.notify();
        library
    }

    /// Append a new book and return its index.
    pub fn add(&mut self, title: &str, author: &str, status: ReadingStatus) -> LibraryResult<usize> {
        require_fields(title, author)?;

        self.records.push(BookRecord::new(title, author, status));
        let index = self.records.len() - 1;
        debug!("event=book_added module=library index={index} count={}", self.records.len());
        self.notify();
        Ok(index)
    }

    /// Replace the selected book in place and return its index. The selection
    /// is checked before the fields so a missing selection always wins.
    pub fn edit(
        &mut self,
        selection: Option<usize>,
        title: &str,
        author: &str,
        status: ReadingStatus,
    ) -> LibraryResult<usize> {
        let index = self.require_selection(selection, RecordAction::Edit)?;
        require_fields(title, author)?;

        self.records[index] = BookRecord::new(title, author, status);
        debug!("event=book_edited module=library index={index}");
        self.notify();
        Ok(index)
    }

    /// Remove the selected book, shifting every later record up by one.
    pub fn delete(&mut self, selection: Option<usize>) -> LibraryResult<BookRecord> {
        let index = self.require_selection(selection, RecordAction::Delete)?;

        let removed = self.records.remove(index);
        debug!("event=book_deleted module=library index={index} count={}", self.records.len());
        self.notify();
        Ok(removed)
    }

    pub fn list(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&BookRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access for observer state the library does not own, such as a
    /// highlight cursor. Row contents are only ever rebuilt through `refresh`.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn require_selection(&self, selection: Option<usize>, action: RecordAction) -> LibraryResult<usize> {
        match selection {
            Some(index) if index < self.records.len() => Ok(index),
            _ => Err(LibraryError::Selection { action }),
        }
    }

    fn notify(&mut self) {
        self.observer.refresh(&self.records);
    }
}

/// Presence-only check; whitespace counts as content.
fn require_fields(title: &str, author: &str) -> LibraryResult<()> {
    if title.is_empty() || author.is_empty() {
        Err(LibraryError::Validation)
    } else {
        Ok(())
    }
}
