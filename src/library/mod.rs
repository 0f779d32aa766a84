//! In-memory library split across logical submodules.

mod error;
mod manager;
mod store;
mod view;

pub use error::{LibraryError, LibraryResult, RecordAction};
pub use manager::{BookInputs, FormMode, LibraryManager};
pub use store::{Library, LibraryObserver};
pub use view::{BookTable, RowId, TableRow};
