//! The book table as the library screen shows it.
//!
//! Rows are rebuilt from scratch on every store change and numbered from 1.
//! Each row carries the storage index it was built from, so lookups go
//! through the mapping instead of assuming `row - 1`.

use std::fmt;

use crate::models::BookRecord;

use super::store::LibraryObserver;

/// 1-based identifier of a row in the book table. A fresh set is handed out
/// on every rebuild, so a `RowId` is only meaningful against the rebuild that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(usize);

impl RowId {
    /// Encode a storage index as the row identifier shown to the user.
    pub fn from_index(index: usize) -> Self {
        RowId(index + 1)
    }

    /// Build a row identifier from its displayed number. Zero never names a
    /// row.
    pub fn new(number: usize) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(RowId(number))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rendered row: the identifier the user sees, the storage index it maps
/// to, and a copy of the record at rebuild time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: RowId,
    pub index: usize,
    pub record: BookRecord,
}

/// Visual mirror of the library. Rows are rebuilt wholesale on every refresh
/// and carry their storage index, so resolving a row never relies on the
/// caller redoing the `index + 1` arithmetic.
#[derive(Debug, Default)]
pub struct BookTable {
    rows: Vec<TableRow>,
    cursor: usize,
}

impl BookTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records in display order.
    pub fn records(&self) -> impl Iterator<Item = &BookRecord> + '_ {
        self.rows.iter().map(|row| &row.record)
    }

    /// Storage index for a row, or `None` if no such row exists right now.
    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().find(|row| row.id == id).map(|row| row.index)
    }

    /// Position of the highlight cursor. Zero when the table is empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Row under the highlight cursor.
    pub fn cursor_row(&self) -> Option<&TableRow> {
        self.rows.get(self.cursor)
    }

    /// Move the highlight to `id`. Returns `false` for unknown rows.
    pub fn focus_row(&mut self, id: RowId) -> bool {
        match self.rows.iter().position(|row| row.id == id) {
            Some(position) => {
                self.cursor = position;
                true
            }
            None => false,
        }
    }

    pub fn move_cursor(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let mut new = self.cursor as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.cursor = new as usize;
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = 0;
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = self.rows.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }
}

impl LibraryObserver for BookTable {
    fn refresh(&mut self, records: &[BookRecord]) {
        self.rows.clear();
        self.rows
            .extend(records.iter().enumerate().map(|(index, record)| TableRow {
                id: RowId::from_index(index),
                index,
                record: record.clone(),
            }));
        self.ensure_in_bounds();
    }
}
