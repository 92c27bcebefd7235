//! Console logger for the CLI.

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Minimal stderr logger: timestamp, colored level, message.
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => console::style("ERROR").red(),
            Level::Warn => console::style("WARN").yellow(),
            Level::Info => console::style("INFO").green(),
            Level::Debug => console::style("DEBUG").blue(),
            Level::Trace => console::style("TRACE").dim(),
        };
        eprintln!(
            "{} {} {}",
            Local::now().format("%H:%M:%S%.3f"),
            level,
            record.args()
        );
    }

    fn flush(&self) {}
}
