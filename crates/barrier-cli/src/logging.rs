use crate::error::Result;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Initializes the global tracing subscriber. Logs go to stderr so stdout
/// stays clean for the CSV records; an optional file layer captures the same
/// events without ANSI codes.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(path)?;
        let file_layer = fmt::layer().with_writer(file).with_ansi(false);
        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;
    use tracing::{debug, info, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("failed to set up global logger for tests");
        });
    }

    #[test]
    fn initialization_and_macros_work() {
        ensure_global_logger_is_set();
        warn!("warning path");
        info!("info path");
        debug!("debug path");
    }

    #[test]
    fn invalid_log_file_path_propagates_error() {
        let invalid = Path::new("/");
        if cfg!(unix) && invalid.is_dir() {
            let result = setup_logging(0, false, Some(invalid));
            assert!(result.is_err());
        }
    }
}
