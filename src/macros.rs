//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use rust_console_log::prelude::*;
//! use rust_console_log::{success, text};
//!
//! let mut logger = Logger::with_config(LoggerConfig::buffered());
//!
//! // Basic logging
//! text!(logger, "Deploy started");
//!
//! // With format arguments
//! let host = "web-01";
//! success!(logger, "{} is healthy after {} checks", host, 3);
//! ```

/// Write a formatted message at the given level.
///
/// # Examples
///
/// ```
/// # use rust_console_log::prelude::*;
/// # let mut logger = Logger::with_config(LoggerConfig::buffered());
/// use rust_console_log::log;
/// log!(logger, LogLevel::Text, "Simple message");
/// log!(logger, LogLevel::Error, "Exit code: {}", 2);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.write($level, format_args!($($arg)+), $crate::LINE_ENDING)
    };
}

/// Write a plain text line.
#[macro_export]
macro_rules! text {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Text, $($arg)+)
    };
}

/// Write a warning line.
///
/// # Examples
///
/// ```
/// # use rust_console_log::prelude::*;
/// # let mut logger = Logger::with_config(LoggerConfig::buffered());
/// use rust_console_log::warning;
/// warning!(logger, "Retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Write an error line, releasing any deferred console output.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Write a success line.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Success, $($arg)+)
    };
}
