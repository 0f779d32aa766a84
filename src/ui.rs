//! Ratatui front-end: a welcome screen and the library screen it opens.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
