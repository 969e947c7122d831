//! Line rendering for console and buffer output
//!
//! Every write is rendered twice:
//! - Colored: ANSI label and timestamp decoration for the terminal
//! - Plain: `[LABEL]` and `[timestamp]` brackets for the buffer
//!
//! Color escapes never appear in plain output. Colored output always carries
//! its escapes; whether it is printed at all is up to the console sink.

use super::error::Result;
use super::log_level::{LogLevel, DUMP_COLORS, DUMP_LABEL};
use colored::Color;
use serde::Serialize;
use serde_json::Value;

/// Default line terminator for the current platform
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Rendering style of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Terminal rendering with color escapes
    ///
    /// Example: ` ERROR  disk full` with the label on a red background
    Colored,

    /// Uncolored rendering for buffers and files
    ///
    /// Example: `[18-10-2026 14:05:09] [ERROR] disk full`
    Plain,
}

impl OutputStyle {
    /// Render a complete line: label first, then the timestamp wrapping it
    pub fn render(
        &self,
        level: LogLevel,
        body: &str,
        timestamp: Option<&str>,
        show_labels: bool,
    ) -> String {
        let mut line = body.to_string();

        if show_labels {
            if let (Some(label), Some(colors)) = (level.label(), level.colors()) {
                line = self.add_label(&line, label, colors);
            }
        }

        if let Some(stamp) = timestamp {
            line = self.add_timestamp(&line, stamp);
        }

        line
    }

    /// Prefix `text` with a level label
    pub fn add_label(&self, text: &str, label: &str, (fg, bg): (Color, Color)) -> String {
        match self {
            OutputStyle::Colored => {
                let badge = paint(&format!(" {} ", label), fg, Some(bg), false);
                format!("{} {}", badge, text)
            }
            OutputStyle::Plain => format!("[{}] {}", label, text),
        }
    }

    /// Prefix `text` with a bracketed timestamp
    pub fn add_timestamp(&self, text: &str, stamp: &str) -> String {
        match self {
            OutputStyle::Colored => format!(
                "{}{}{} {}",
                paint("[", Color::White, None, true),
                paint(stamp, Color::White, None, false),
                paint("]", Color::White, None, true),
                text
            ),
            OutputStyle::Plain => format!("[{}] {}", stamp, text),
        }
    }
}

/// Wrap `text` in SGR escapes for the given colors
///
/// Built from the color codes directly so the result does not depend on
/// `colored`'s process-wide terminal detection.
fn paint(text: &str, fg: Color, bg: Option<Color>, bold: bool) -> String {
    let mut codes = Vec::with_capacity(3);
    if bold {
        codes.push("1".into());
    }
    codes.push(fg.to_fg_str());
    if let Some(bg) = bg {
        codes.push(bg.to_bg_str());
    }
    format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
}

/// Render the console block printed by `dump`
///
/// The label sits on its own line when labels are enabled so a multi-line
/// representation starts at column zero.
pub fn render_dump(representation: &str, show_labels: bool) -> String {
    let mut out = String::new();
    if show_labels {
        out.push_str(&OutputStyle::Colored.add_label("", DUMP_LABEL, DUMP_COLORS));
        out.push_str(LINE_ENDING);
    }
    out.push_str(&paint(representation, Color::White, None, false));
    out.push_str(LINE_ENDING);
    out
}

/// Human readable representation of a value for `dump`
///
/// Scalars (strings, numbers, booleans, null) use their literal form;
/// arrays and objects are pretty-printed recursively.
pub fn dump_representation<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Array(_) | Value::Object(_) => serde_json::to_string_pretty(&value)?,
        scalar => serde_json::to_string(&scalar)?,
    };
    Ok(rendered)
}
