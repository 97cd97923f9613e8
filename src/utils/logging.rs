// src/utils/logging.rs
//! Logging configuration
//!
//! Standard output belongs to the report itself, so diagnostics are
//! written to stderr. Uses `env_logger` with the same record layout as
//! the rest of the tooling.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;

/// Initializes the logging subsystem
///
/// # Configuration
/// - Logs to stderr
/// - Default log level: Warn
/// - Respects `RUST_LOG` environment variable if set
pub fn init_logging() {
    let mut builder = common_log_config();

    if env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Warn);
    } else {
        builder.parse_env("RUST_LOG");
    }

    // A second init (e.g. from tests) is not an error worth reporting.
    let _ = builder.try_init();
}

/// Initializes logging at debug level for `--verbose` runs
///
/// `RUST_LOG` is ignored here, the flag wins.
pub fn init_verbose_logging() {
    let _ = common_log_config()
        .filter_level(LevelFilter::Debug)
        .try_init();
}

/// Creates a base logger builder
///
/// Record format: `[<epoch seconds> <level> <module>:<line>] <message>`
fn common_log_config() -> Builder {
    let mut builder = Builder::new();

    builder
        .format(|buf, record| {
            use std::io::Write;
            let ts = buf.timestamp_seconds();
            let level = record.level();
            let module = record.module_path().unwrap_or_default();
            let line = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                ts,
                level,
                module,
                line,
                record.args()
            )
        })
        .target(Target::Stderr);

    builder
}
