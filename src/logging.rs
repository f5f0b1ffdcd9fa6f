use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file. When unset, logs go to stderr.
pub const LOG_FILE_ENV: &str = "COUNTER_STORE_LOG";

/// Default level when logging to a file.
pub const FILE_DEFAULT_LEVEL: &str = "info";

/// Default level on stderr: only fetch failures and abandoned fetches.
pub const STDERR_DEFAULT_LEVEL: &str = "warn";

fn filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize tracing.
///
/// `RUST_LOG` overrides the level. If `COUNTER_STORE_LOG` is set, events at
/// `info` and above go to that file without ANSI colours. Otherwise only
/// warnings reach stderr, so a normal CLI run prints just its report.
pub fn init_tracing() {
    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        match std::fs::File::create(&log_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);

                tracing_subscriber::registry()
                    .with(filter_or(FILE_DEFAULT_LEVEL))
                    .with(file_layer)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log file {}: {}", log_path, e);
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter_or(STDERR_DEFAULT_LEVEL))
        .with(stderr_layer)
        .init();
}
