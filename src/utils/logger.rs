// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Installs the stderr logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

/// Format: "🔴  Edge catalog unavailable: ..."
fn format_line(record: &Record) -> String {
  format!("{}  {}\n", icon(record.level()), record.args())
}

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let line = format_line(record);
      let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
