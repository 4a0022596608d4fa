use mmp::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger. `RUST_LOG` takes precedence over the chosen level.
pub fn configure_app(verbose: bool) -> Result {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()?;

    return Ok(());
}
