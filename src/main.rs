//! Binary entry point: resolve configuration, start file logging, and drive
//! the Ratatui event loop until the user exits.
use book_buddy::{init_logging, run_app, App, Config};
use log::{error, info};

/// Returning a `Result` bubbles up fatal startup problems (for example an
/// unwritable log directory) to the terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let _logger = init_logging(&config)?;

    let mut app = App::new();
    let result = run_app(&mut app);

    match &result {
        Ok(()) => info!("event=app_exit module=core status=ok"),
        Err(err) => error!("event=app_exit module=core status=error reason={err:#}"),
    }
    result
}
