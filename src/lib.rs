//! Core library surface for the Book Buddy TUI application.
//!
//! The record store and its table binding live in [`library`] and know
//! nothing about the terminal, so they can be driven directly from tests or
//! other front-ends. [`ui`] wraps them in a Ratatui interface.
pub mod config;
pub mod library;
pub mod logging;
pub mod models;
pub mod ui;

/// Startup helpers used by `main.rs`.
pub use config::Config;
pub use logging::init_logging;

/// The domain types the library screen manipulates.
pub use library::{LibraryError, LibraryManager};
pub use models::{BookRecord, ReadingStatus};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
