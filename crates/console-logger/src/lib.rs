//! Console Logger
//!
//! `log` backend that forwards records to the browser console.
//! Errors and warnings use `console.error` / `console.warn` so they show up
//! highlighted in devtools; everything else goes through `console.log`.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing `[LEVEL target] message` lines to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: JsValue = format_line(record.level(), record.target(), &record.args().to_string()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Format a record the way the console shows it
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    // Targets are module paths; only the last segment is useful in devtools.
    let tag = target.rsplit("::").next().unwrap_or(target);
    format!("[{} {}] {}", level, tag, message)
}
