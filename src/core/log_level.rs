//! Log level definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used by [`Logger::dump`](crate::Logger::dump)
pub const DUMP_LABEL: &str = "DUMP";

/// Console colors of the dump label (foreground, background)
pub const DUMP_COLORS: (Color, Color) = (Color::Black, Color::BrightWhite);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    /// Plain text, never labelled
    #[default]
    Text,
    Warning,
    Error,
    Success,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Text,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Success,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Text => "TEXT",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Success => "SUCCESS",
        }
    }

    /// Label printed in front of the message, `None` for plain text
    pub fn label(&self) -> Option<&'static str> {
        match self {
            LogLevel::Text => None,
            level => Some(level.to_str()),
        }
    }

    /// Console label colors as (foreground, background)
    pub fn colors(&self) -> Option<(Color, Color)> {
        match self {
            LogLevel::Text => None,
            LogLevel::Warning => Some((Color::Black, Color::BrightYellow)),
            LogLevel::Error => Some((Color::White, Color::BrightRed)),
            LogLevel::Success => Some((Color::Black, Color::BrightGreen)),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogLevel::Error)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TEXT" | "INFO" => Ok(LogLevel::Text),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "SUCCESS" => Ok(LogLevel::Success),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
