//! Binds the input form to the record store: selecting a row loads it into
//! the inputs, and every successful change clears them again.

use log::warn;

use crate::models::{BookRecord, ReadingStatus};

use super::error::LibraryResult;
use super::store::Library;
use super::view::{BookTable, RowId};

/// Editable values behind the title, author and status inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookInputs {
    pub title: String,
    pub author: String,
    pub status: ReadingStatus,
}

impl BookInputs {
    fn from_record(record: &BookRecord) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author.clone(),
            status: record.status,
        }
    }
}

/// Whether the inputs describe a new book or the one loaded from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Editing(RowId),
}

impl FormMode {
    pub fn selected_row(self) -> Option<RowId> {
        match self {
            FormMode::Create => None,
            FormMode::Editing(row) => Some(row),
        }
    }
}

/// The library behind one visit to the library screen: the record store, the
/// table it keeps in sync, and the input form with its mode.
///
/// Every mutation reads the current inputs, and on success clears them and
/// drops back into [`FormMode::Create`]. Failures leave inputs and mode alone
/// so the user can correct them.
pub struct LibraryManager {
    library: Library<BookTable>,
    inputs: BookInputs,
    mode: FormMode,
}

impl Default for LibraryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryManager {
    pub fn new() -> Self {
        Self {
            library: Library::new(BookTable::new()),
            inputs: BookInputs::default(),
            mode: FormMode::Create,
        }
    }

    pub fn inputs(&self) -> &BookInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut BookInputs {
        &mut self.inputs
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Every record in display order.
    pub fn records(&self) -> &[BookRecord] {
        self.library.list()
    }

    pub fn table(&self) -> &BookTable {
        self.library.observer()
    }

    pub fn table_mut(&mut self) -> &mut BookTable {
        self.library.observer_mut()
    }

    /// Add the book described by the inputs and highlight its new row.
    pub fn add_book(&mut self) -> LibraryResult<RowId> {
        let index = self
            .library
            .add(&self.inputs.title, &self.inputs.author, self.inputs.status)?;
        let row = RowId::from_index(index);
        self.table_mut().focus_row(row);
        self.clear_inputs();
        Ok(row)
    }

    /// Overwrite the selected book with the inputs.
    pub fn edit_book(&mut self) -> LibraryResult<RowId> {
        let selection = self.selected_index();
        let index = self.library.edit(
            selection,
            &self.inputs.title,
            &self.inputs.author,
            self.inputs.status,
        )?;
        let row = RowId::from_index(index);
        self.table_mut().focus_row(row);
        self.clear_inputs();
        Ok(row)
    }

    /// Remove the selected book and return it.
    pub fn delete_book(&mut self) -> LibraryResult<BookRecord> {
        let selection = self.selected_index();
        let removed = self.library.delete(selection)?;
        self.clear_inputs();
        Ok(removed)
    }

    /// Remove the book under the table cursor, whatever the form is editing.
    pub fn delete_cursor_row(&mut self) -> LibraryResult<BookRecord> {
        let highlighted = self.table().cursor_row().map(|row| row.index);
        let removed = self.library.delete(highlighted)?;
        self.clear_inputs();
        Ok(removed)
    }

    /// The record currently shown in `row`, if the table has such a row.
    pub fn record_for(&self, row: RowId) -> Option<&BookRecord> {
        self.table()
            .index_of(row)
            .and_then(|index| self.library.get(index))
    }

    /// Load the record behind `row` into the inputs and switch to editing it.
    /// Unknown rows leave everything untouched and return `false`.
    pub fn select_row(&mut self, row: RowId) -> bool {
        match self.record_for(row).map(BookInputs::from_record) {
            Some(inputs) => {
                self.inputs = inputs;
                self.mode = FormMode::Editing(row);
                self.table_mut().focus_row(row);
                true
            }
            None => {
                warn!(
                    "event=row_lookup_miss module=library row={row} rows={} records={}",
                    self.table().len(),
                    self.library.len()
                );
                false
            }
        }
    }

    /// Select whichever row the table cursor is on, returning it.
    pub fn select_cursor_row(&mut self) -> Option<RowId> {
        let row = self.table().cursor_row().map(|row| row.id)?;
        self.select_row(row).then_some(row)
    }

    /// Reset the inputs to a blank `NotStarted` book in create mode.
    pub fn clear_inputs(&mut self) {
        self.inputs = BookInputs::default();
        self.mode = FormMode::Create;
    }

    fn selected_index(&self) -> Option<usize> {
        self.mode
            .selected_row()
            .and_then(|row| self.table().index_of(row))
    }
}
