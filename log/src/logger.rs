use crate::{LogError, LogLevel, Logger, set_logger};
use dirs::data_dir;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Console logger with an optional plain-text file copy.
///
/// The minimum level is held in an atomic so it can be raised or lowered
/// through the shared handle after installation.
pub struct ConsoleLogger {
    level: AtomicU8,
    log_file: Option<PathBuf>,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel, log_file: Option<PathBuf>) -> Self {
        if let Some(file) = &log_file {
            // Rotate a leftover log from the previous run out of the way.
            if file.exists() {
                let mut rotated = file.clone();
                rotated.set_file_name(format!(
                    "{}.log",
                    chrono::Local::now().format("%d%m%Y_%H%M%S")
                ));
                std::fs::rename(file, &rotated).unwrap_or_else(|e| {
                    eprintln!("Failed to rotate existing log file: {e}");
                });
            }

            if let Some(parent) = file.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                        eprintln!("Failed to create log directory: {e}");
                    });
                }
            }
        }

        ConsoleLogger {
            level: AtomicU8::new(level.severity()),
            log_file,
        }
    }

    /// Installs a `ConsoleLogger` writing to the user data directory as the
    /// global logger.
    pub fn init(log_level: LogLevel) -> Result<(), LogError> {
        let log_file = data_dir().map(|dir| dir.join("filterscope").join("latest.log"));
        let logger = Arc::new(ConsoleLogger::new(log_level, log_file));

        set_logger(logger)?;

        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::from_severity(self.level.load(Ordering::Relaxed))
    }
}

fn log_to_file(log_file: &PathBuf, message: &str) -> std::io::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_file)?;
    writeln!(file, "{message}")?;
    Ok(())
}

impl Logger for ConsoleLogger {
    fn set_level(&self, level: LogLevel) {
        self.level.store(level.severity(), Ordering::Relaxed);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level.passes(self.min_level()) {
            let timestamp = chrono::Local::now().format("%d%m%Y %H:%M:%S");
            println!("{timestamp} - [{level}] - {message}");
            if let Some(ref file) = self.log_file {
                let write_msg = format!("{} - [{}] - {}", timestamp, level.raw_str(), message);
                log_to_file(file, &write_msg).unwrap_or_else(|e| {
                    eprintln!("Failed to write to log file: {e}");
                });
            }
        }
    }
}
