//! Logger configuration

use super::timestamp::DEFAULT_TIME_FORMAT;
use serde::{Deserialize, Serialize};

/// Formatting and routing options of a [`Logger`](crate::Logger)
///
/// Changes apply to the next write; text already buffered is never rewritten.
///
/// # Examples
///
/// ```
/// use rust_console_log::LoggerConfig;
///
/// let config = LoggerConfig::new()
///     .with_output_to_buffer(true)
///     .with_time_format("%H:%M:%S");
/// assert!(config.output_to_console);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Prefix each line with a timestamp
    pub use_timestamps: bool,
    /// strftime pattern used for timestamps
    pub time_format: String,
    /// Prefix warning, error and success lines with their label
    pub show_labels: bool,
    /// Render writes to the console
    pub output_to_console: bool,
    /// Append writes to the main buffer
    pub output_to_buffer: bool,
    /// Hold console output back until the first error
    pub output_only_if_error: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            use_timestamps: true,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            show_labels: true,
            output_to_console: true,
            output_to_buffer: false,
            output_only_if_error: false,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_use_timestamps(mut self, using: bool) -> Self {
        self.use_timestamps = using;
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_output_to_console(mut self, flag: bool) -> Self {
        self.output_to_console = flag;
        self
    }

    #[must_use]
    pub fn with_output_to_buffer(mut self, flag: bool) -> Self {
        self.output_to_buffer = flag;
        self
    }

    #[must_use]
    pub fn with_output_only_if_error(mut self, flag: bool) -> Self {
        self.output_only_if_error = flag;
        self
    }

    /// Buffer-only setup: no console, everything kept in memory
    #[must_use]
    pub fn buffered() -> Self {
        Self::default()
            .with_output_to_console(false)
            .with_output_to_buffer(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(config.use_timestamps);
        assert_eq!(config.time_format, "%d-%m-%Y %H:%M:%S");
        assert!(config.show_labels);
        assert!(config.output_to_console);
        assert!(!config.output_to_buffer);
        assert!(!config.output_only_if_error);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggerConfig::new()
            .with_use_timestamps(false)
            .with_time_format("%H:%M")
            .with_show_labels(false)
            .with_output_to_console(false)
            .with_output_to_buffer(true)
            .with_output_only_if_error(true);

        assert!(!config.use_timestamps);
        assert_eq!(config.time_format, "%H:%M");
        assert!(!config.show_labels);
        assert!(!config.output_to_console);
        assert!(config.output_to_buffer);
        assert!(config.output_only_if_error);
    }

    #[test]
    fn test_buffered_preset() {
        let config = LoggerConfig::buffered();
        assert!(!config.output_to_console);
        assert!(config.output_to_buffer);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"output_to_buffer":true}"#).expect("deserialize");
        assert!(config.output_to_buffer);
        assert!(config.use_timestamps);
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
    }
}
