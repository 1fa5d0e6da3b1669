//! # Logging Library
//!
//! Process-global logging with configurable levels and colored console
//! output. A single [`Logger`] implementation is installed once at startup;
//! the level macros below route everything through it.
use colored::Colorize;
use std::fmt::Display;
use std::sync::{Arc, OnceLock};

/// Submodule containing the console logger implementation
pub mod logger;

// The one global logger handle. Installed exactly once.
static LOGGER: OnceLock<Arc<dyn Logger + Send + Sync>> = OnceLock::new();

/// Sets the global logger instance for the application
///
/// # Arguments
///
/// * `logger` - A thread-safe reference to a logger implementation
///
/// # Returns
///
/// * `Ok(())` if the logger was successfully set
/// * `Err(LogError::AlreadyInitialized)` if a logger has already been installed
pub fn set_logger(logger: Arc<dyn Logger + Send + Sync>) -> Result<(), LogError> {
    LOGGER
        .set(logger)
        .map_err(|_| LogError::AlreadyInitialized)
}

/// Retrieves a reference to the current global logger, if one is set
///
/// # Returns
///
/// * `Some(Arc<dyn Logger + Send + Sync>)` if a logger has been installed
/// * `None` if no logger has been set
pub fn logger() -> Option<Arc<dyn Logger + Send + Sync>> {
    LOGGER.get().cloned()
}

/// Errors that can occur during logger operations
#[derive(Debug)]
pub enum LogError {
    /// Returned when attempting to install a logger after one has already been set
    AlreadyInitialized,
    /// Returned when attempting to use a logger before one has been set
    NoLogger,
}

impl Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::AlreadyInitialized => write!(f, "Logger has already been initialized"),
            LogError::NoLogger => write!(f, "No logger set"),
        }
    }
}

/// Trait that all logger implementations must implement
pub trait Logger: Send + Sync {
    /// Logs a message at INFO level
    fn info(&self, message: &str);
    /// Logs a message at WARNING level
    fn warning(&self, message: &str);
    /// Logs a message at ERROR level
    fn error(&self, message: &str);
    /// Logs a message at CRITICAL level
    fn critical(&self, message: &str);
    /// Logs a message at DEBUG level
    fn debug(&self, message: &str);
    /// Logs a message with a specified log level
    fn log(&self, level: LogLevel, message: &str);
    /// Sets the minimum logging level that will be output
    fn set_level(&self, level: LogLevel);
}

/// The possible logging levels in order of increasing severity
///
/// The default level is Info. `NoLog` is a threshold-only level that
/// suppresses all output when used as the minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug information for development purposes
    Debug,
    #[default]
    /// Standard informational messages
    Info,
    /// Warning messages indicating potential issues
    Warning,
    /// Error messages for recoverable failures
    Error,
    /// Critical messages for severe errors that might cause program termination
    Critical,
    /// Special level that suppresses all logging
    NoLog,
}

impl LogLevel {
    /// Returns the string representation of the log level
    pub fn raw_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::NoLog => "NOLOG",
        }
    }

    /// Numeric severity used for threshold filtering
    pub fn severity(&self) -> u8 {
        match self {
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Warning => 3,
            LogLevel::Error => 4,
            LogLevel::Critical => 5,
            LogLevel::NoLog => 6,
        }
    }

    /// Inverse of [`LogLevel::severity`], clamping unknown values to `NoLog`
    pub fn from_severity(value: u8) -> Self {
        match value {
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warning,
            4 => LogLevel::Error,
            5 => LogLevel::Critical,
            _ => LogLevel::NoLog,
        }
    }

    /// Whether a message at this level passes the given minimum level
    pub fn passes(&self, min: LogLevel) -> bool {
        *self != LogLevel::NoLog && self.severity() >= min.severity()
    }
}

impl Display for LogLevel {
    /// Provides colored text formatting for each log level
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LogLevel::*;
        let level_str = match self {
            NoLog => String::new(),
            Debug => format!("{}", "DEBUG".cyan().bold()),
            Info => format!("{}", "INFO".blue().bold()),
            Warning => format!("{}", "WARNING".yellow().bold()),
            Error => format!("{}", "ERROR".red().bold()),
            Critical => format!("{}", "CRITICAL".bright_red().bold()),
        };
        write!(f, "{level_str}")
    }
}

/// Logs a message with the specified log level
///
/// # Example
///
/// ```
/// use log::{log, LogLevel};
///
/// log!(LogLevel::Warning, "This is a {} message", "warning");
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {{
        if let Some(logger) = $crate::logger() {
            let message = format!($($arg)*);
            logger.log($level, &message);
        }
    }};
}

/// Logs a message at INFO level
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        $crate::log!($crate::LogLevel::Info, $($arg)*);
    }};
}

/// Logs a message at WARNING level
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {{
        $crate::log!($crate::LogLevel::Warning, $($arg)*);
    }};
}

/// Logs a message at ERROR level
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::log!($crate::LogLevel::Error, $($arg)*);
    }};
}

/// Logs a message at CRITICAL level
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {{
        $crate::log!($crate::LogLevel::Critical, $($arg)*);
    }};
}

/// Logs a message at DEBUG level
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        $crate::log!($crate::LogLevel::Debug, $($arg)*);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::ConsoleLogger;

    #[test]
    fn test_console_logger() {
        if let Some(logger) = logger() {
            logger.set_level(LogLevel::Debug);
        } else {
            let logger = Arc::new(ConsoleLogger::new(LogLevel::Debug, None));
            set_logger(logger).unwrap_or(());
        }

        debug!("This is a debug message");
        info!("This is an info message");
        warning!("This is a warning message");
        error!("This is an error message");
        critical!("This is a critical message");
    }

    #[test]
    fn test_level_threshold() {
        assert!(!LogLevel::Debug.passes(LogLevel::Warning));
        assert!(!LogLevel::Info.passes(LogLevel::Warning));
        assert!(LogLevel::Warning.passes(LogLevel::Warning));
        assert!(LogLevel::Error.passes(LogLevel::Warning));
        assert!(LogLevel::Critical.passes(LogLevel::Warning));
    }

    #[test]
    fn test_nolog_suppresses_everything() {
        assert!(!LogLevel::Critical.passes(LogLevel::NoLog));
        assert!(!LogLevel::NoLog.passes(LogLevel::Debug));
    }

    #[test]
    fn test_severity_round_trip() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Critical,
            LogLevel::NoLog,
        ] {
            assert_eq!(LogLevel::from_severity(level.severity()), level);
        }
    }
}
