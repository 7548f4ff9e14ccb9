use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;

use crate::error::ResultsError;

/// Writes each log record to stderr as one JSON object per line.
pub struct JsonLineLogger {
    level: LevelFilter,
}

impl JsonLineLogger {
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn format(record: &Record<'_>) -> String {
        json!({
            "level": record.level().as_str(),
            "target": record.target(),
            "msg": record.args().to_string(),
        })
        .to_string()
    }
}

impl Log for JsonLineLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

/// Parses `error|warn|info|debug|trace|off`, case-insensitively.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Installs the logger for the process. Can only succeed once.
///
/// # Errors
/// Returns an error if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), ResultsError> {
    static ERROR: JsonLineLogger = JsonLineLogger::new(LevelFilter::Error);
    static WARN: JsonLineLogger = JsonLineLogger::new(LevelFilter::Warn);
    static INFO: JsonLineLogger = JsonLineLogger::new(LevelFilter::Info);
    static DEBUG: JsonLineLogger = JsonLineLogger::new(LevelFilter::Debug);
    static TRACE: JsonLineLogger = JsonLineLogger::new(LevelFilter::Trace);
    static OFF: JsonLineLogger = JsonLineLogger::new(LevelFilter::Off);

    let logger: &'static JsonLineLogger = match level.to_level() {
        Some(Level::Error) => &ERROR,
        Some(Level::Warn) => &WARN,
        Some(Level::Info) => &INFO,
        Some(Level::Debug) => &DEBUG,
        Some(Level::Trace) => &TRACE,
        None => &OFF,
    };
    log::set_logger(logger).map_err(|e| ResultsError::Other(format!("install logger: {e}")))?;
    log::set_max_level(level);
    Ok(())
}
