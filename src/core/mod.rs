//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod sink;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::{LogLevel, DUMP_LABEL};
pub use logger::{LogCallback, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::{OutputStyle, LINE_ENDING};
pub use sink::{ConsoleSink, SaveMode, SaveTarget};
pub use timestamp::{Clock, FixedClock, SystemClock, DEFAULT_TIME_FORMAT};
