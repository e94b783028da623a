//! Minimal stdout logger for the simulation binary.

use std::env;

use log::{LevelFilter, Metadata, Record};

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Environment variable holding the log level (`error` .. `trace`).
pub const LOG_ENV: &str = "HANABI_LOG";

/// Parse a level name, falling back to `info`.
#[must_use]
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from `HANABI_LOG`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
