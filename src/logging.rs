#![cfg(feature = "std")]

use std::env;
use std::io::{self, Write};

use log::{self, Level, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "TINCAN_LOG";

/// Level used by `play` when [`LOG_ENV`] is unset.
///
/// Round reports go out at `info`; keeping them off the terminal the display
/// is drawn on unless asked for.
pub const PLAY_LOG_DEFAULT: LevelFilter = LevelFilter::Warn;

/// Level used by `simulate` when [`LOG_ENV`] is unset.
pub const SIMULATE_LOG_DEFAULT: LevelFilter = LevelFilter::Info;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // stdout belongs to the display and to the simulation summary.
        let mut err = io::stderr().lock();
        let _ = match record.level() {
            Level::Info => writeln!(err, "{}", record.args()),
            level => writeln!(err, "[{} {}] {}", level, record.target(), record.args()),
        };
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `default` when it is missing or not a
/// level.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger with the level from [`LOG_ENV`], or `default`.
///
/// Calling it again keeps the first logger and only moves the level.
pub fn init_logging(default: LevelFilter) {
    let value = env::var(LOG_ENV).ok();
    let level = level_from(value.as_deref(), default);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
