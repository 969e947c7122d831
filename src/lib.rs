//! # Rust Console Log
//!
//! A console text logger for command line programs.
//!
//! ## Features
//!
//! - **Leveled Output**: text, warning, error and success lines with colored labels
//! - **Timestamps**: strftime-formatted, switchable per logger
//! - **Buffering**: plain-text copy of the output, readable and savable to a file
//! - **Deferred Errors**: keep the console quiet until something actually fails
//!
//! ```
//! use rust_console_log::prelude::*;
//!
//! let mut logger = Logger::with_config(LoggerConfig::buffered());
//! logger.success("build finished");
//! assert!(logger.get().contains("[SUCCESS] build finished"));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{FileTarget, MemoryConsole, StdoutConsole};
    pub use crate::core::{
        Clock, ConsoleSink, FixedClock, LogCallback, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, OutputStyle, Result, SaveMode, SaveTarget,
        SystemClock, DEFAULT_TIME_FORMAT, LINE_ENDING,
    };
}

pub use appenders::{FileTarget, MemoryConsole, StdoutConsole};
pub use core::{
    Clock, ConsoleSink, FixedClock, LogCallback, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, OutputStyle, Result, SaveMode, SaveTarget, SystemClock,
    DEFAULT_TIME_FORMAT, LINE_ENDING,
};
