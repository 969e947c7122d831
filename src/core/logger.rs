//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_format::{dump_representation, render_dump, OutputStyle, LINE_ENDING},
    sink::{ConsoleSink, SaveMode, SaveTarget},
    timestamp::{format_timestamp, Clock, SystemClock},
};
use crate::appenders::{FileTarget, StdoutConsole};
use serde::Serialize;
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::Arc;

/// Callback receiving every chunk of text appended to the main buffer
pub type LogCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Leveled console logger with an in-memory buffer
///
/// Each write is rendered for the console (colored labels and timestamp) and
/// for the buffer (`[LABEL]`/`[timestamp]` plain text) according to the
/// current [`LoggerConfig`].
///
/// With `output_only_if_error` set, console output is held in a deferred
/// buffer. The first error write releases everything held so far, prints
/// itself and switches deferral off for good.
///
/// A `Logger` is not synchronized; callers sharing one across threads must
/// serialize access themselves.
///
/// # Example
///
/// ```
/// use rust_console_log::prelude::*;
///
/// let mut logger = Logger::with_config(
///     LoggerConfig::buffered().with_use_timestamps(false),
/// );
///
/// logger.warning("low disk space");
/// assert_eq!(logger.get(), format!("[WARNING] low disk space{}", LINE_ENDING));
/// ```
pub struct Logger {
    config: LoggerConfig,
    buffer: String,
    deferred: String,
    callback: Option<LogCallback>,
    console: Box<dyn ConsoleSink>,
    clock: Box<dyn Clock>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with default configuration writing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Replace the whole configuration
    pub fn set_config(&mut self, config: LoggerConfig) {
        self.config = config;
    }

    pub fn set_use_timestamps(&mut self, using: bool) {
        self.config.use_timestamps = using;
    }

    /// Set the strftime pattern used for timestamps
    pub fn set_time_format(&mut self, format: impl Into<String>) {
        self.config.time_format = format.into();
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.config.show_labels = show;
    }

    pub fn set_output_to_console(&mut self, flag: bool) {
        self.config.output_to_console = flag;
    }

    pub fn set_output_to_buffer(&mut self, flag: bool) {
        self.config.output_to_buffer = flag;
    }

    /// Hold console output back until an error is written
    ///
    /// Only future writes are affected; nothing is flushed or cleared here.
    pub fn set_output_only_if_error(&mut self, flag: bool) {
        self.config.output_only_if_error = flag;
    }

    /// Register the buffer callback, replacing any previous one
    ///
    /// The callback runs inline after each buffer append with exactly the
    /// appended text. Console-only and deferred output never reach it.
    pub fn set_log_callback<F>(&mut self, callback: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
    }

    pub fn clear_log_callback(&mut self) {
        self.callback = None;
    }

    /// Get logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn text(&mut self, message: impl Display) {
        self.write(LogLevel::Text, message, LINE_ENDING);
    }

    #[inline]
    pub fn warning(&mut self, message: impl Display) {
        self.write(LogLevel::Warning, message, LINE_ENDING);
    }

    #[inline]
    pub fn error(&mut self, message: impl Display) {
        self.write(LogLevel::Error, message, LINE_ENDING);
    }

    #[inline]
    pub fn success(&mut self, message: impl Display) {
        self.write(LogLevel::Success, message, LINE_ENDING);
    }

    /// Plain text with a custom line terminator
    #[inline]
    pub fn text_with(&mut self, message: impl Display, terminator: &str) {
        self.write(LogLevel::Text, message, terminator);
    }

    #[inline]
    pub fn warning_with(&mut self, message: impl Display, terminator: &str) {
        self.write(LogLevel::Warning, message, terminator);
    }

    #[inline]
    pub fn error_with(&mut self, message: impl Display, terminator: &str) {
        self.write(LogLevel::Error, message, terminator);
    }

    #[inline]
    pub fn success_with(&mut self, message: impl Display, terminator: &str) {
        self.write(LogLevel::Success, message, terminator);
    }

    /// Write `message` followed by `terminator` at `level`
    ///
    /// Console and buffer routing are evaluated independently. One clock
    /// reading is shared by both renderings.
    pub fn write(&mut self, level: LogLevel, message: impl Display, terminator: &str) {
        let body = format!("{}{}", message, terminator);
        let stamp = self
            .config
            .use_timestamps
            .then(|| format_timestamp(&self.clock.now(), &self.config.time_format));

        if self.config.output_to_console {
            if level.is_error() && self.config.output_only_if_error {
                self.release_deferred();
            }
            let line = OutputStyle::Colored.render(
                level,
                &body,
                stamp.as_deref(),
                self.config.show_labels,
            );
            self.output(&line);
        }

        if self.config.output_to_buffer {
            let line =
                OutputStyle::Plain.render(level, &body, stamp.as_deref(), self.config.show_labels);
            self.append_buffer(line);
        }
    }

    /// Print a labelled, human readable rendering of `value`
    ///
    /// Console only: the buffer, the callback and deferral are bypassed and
    /// nothing is printed outside an interactive context.
    pub fn dump<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let representation = dump_representation(value)?;
        let block = render_dump(&representation, self.config.show_labels);

        if !self.console.is_interactive() {
            self.metrics.record_suppressed();
            return Ok(());
        }
        self.emit(&block);
        Ok(())
    }

    /// Empty the main buffer; deferred output and configuration are untouched
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Current main buffer contents
    pub fn get(&self) -> &str {
        &self.buffer
    }

    /// Console output waiting for an error
    pub fn deferred(&self) -> &str {
        &self.deferred
    }

    /// Write the main buffer to `path`, returning the number of bytes written
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::IoOperation`](crate::LoggerError::IoOperation)
    /// carrying the underlying IO error. The write is not retried.
    pub fn save(&self, path: impl AsRef<Path>, append: bool) -> Result<usize> {
        let mut target = FileTarget::new(path.as_ref());
        self.save_to(&mut target, SaveMode::from_append(append))
    }

    /// Write the main buffer to any [`SaveTarget`]
    pub fn save_to<T: SaveTarget + ?Sized>(&self, target: &mut T, mode: SaveMode) -> Result<usize> {
        target.persist(self.buffer.as_bytes(), mode)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.console.flush()
    }

    /// Route a console rendering: suppress, defer or print
    fn output(&mut self, text: &str) {
        if !self.console.is_interactive() {
            self.metrics.record_suppressed();
            return;
        }

        if self.config.output_only_if_error {
            self.deferred.push_str(text);
            self.metrics.record_deferred_line();
            return;
        }

        self.emit(text);
    }

    /// Print and clear the deferred buffer, then stop deferring
    fn release_deferred(&mut self) {
        self.config.output_only_if_error = false;
        self.metrics.record_deferred_flush();

        let pending = std::mem::take(&mut self.deferred);
        if pending.is_empty() {
            return;
        }
        if self.console.is_interactive() {
            self.emit(&pending);
        } else {
            self.metrics.record_suppressed();
        }
    }

    fn emit(&mut self, text: &str) {
        match self.console.write_str(text) {
            Ok(()) => {
                self.metrics.record_console_line();
            }
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Console '{}' write failed: {}",
                    self.console.name(),
                    e
                );
                self.metrics.record_failed_write();
            }
        }
    }

    fn append_buffer(&mut self, text: String) {
        self.buffer.push_str(&text);
        self.metrics.record_buffered_line();

        if let Some(ref callback) = self.callback {
            callback(text.as_str());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("buffer_len", &self.buffer.len())
            .field("deferred_len", &self.deferred.len())
            .field("has_callback", &self.callback.is_some())
            .field("console", &self.console.name())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.console.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_console_log::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .config(LoggerConfig::new().with_output_to_buffer(true))
///     .console(StdoutConsole::new())
///     .log_callback(Arc::new(|line: &str| {
///         eprint!("mirror: {}", line);
///     }))
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<Box<dyn ConsoleSink>>,
    clock: Option<Box<dyn Clock>>,
    callback: Option<LogCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            console: None,
            clock: None,
            callback: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the console sink (defaults to stdout)
    #[must_use = "builder methods return a new value"]
    pub fn console<C: ConsoleSink + 'static>(mut self, console: C) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    /// Set the time source (defaults to the local wall clock)
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_callback(mut self, callback: LogCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            config: self.config,
            buffer: String::new(),
            deferred: String::new(),
            callback: self.callback,
            console: self
                .console
                .unwrap_or_else(|| Box::new(StdoutConsole::new())),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
