//! Console sink implementations

use crate::core::{ConsoleSink, LoggerError, Result};
use parking_lot::Mutex;
use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Writes to the process stdout
///
/// Interactive only when stdout is attached to a terminal, so piped or
/// backgrounded processes stay quiet.
#[derive(Debug, Clone, Copy)]
pub struct StdoutConsole {
    force_interactive: bool,
}

impl StdoutConsole {
    pub fn new() -> Self {
        Self {
            force_interactive: false,
        }
    }

    /// Print even when stdout is not a terminal
    pub fn forced() -> Self {
        Self {
            force_interactive: true,
        }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for StdoutConsole {
    fn is_interactive(&self) -> bool {
        self.force_interactive || std::io::stdout().is_terminal()
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Captures console output in memory
///
/// Clones share the same capture, so a handle kept by the caller sees
/// everything written through the copy handed to the logger.
///
/// # Examples
///
/// ```
/// use rust_console_log::appenders::MemoryConsole;
/// use rust_console_log::{Logger, LoggerConfig};
///
/// let console = MemoryConsole::new();
/// let mut logger = Logger::builder()
///     .config(LoggerConfig::new().with_use_timestamps(false))
///     .console(console.clone())
///     .build();
///
/// logger.text("hello");
/// assert!(console.contents().contains("hello"));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryConsole {
    output: Arc<Mutex<String>>,
    interactive: Arc<AtomicBool>,
    failing: Arc<AtomicBool>,
}

impl MemoryConsole {
    /// An interactive capture
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(String::new())),
            interactive: Arc::new(AtomicBool::new(true)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A capture that reports a non-terminal context
    pub fn non_interactive() -> Self {
        let console = Self::new();
        console.set_interactive(false);
        console
    }

    pub fn set_interactive(&self, interactive: bool) {
        self.interactive.store(interactive, Ordering::Relaxed);
    }

    /// Make subsequent writes fail with a writer error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    pub fn contents(&self) -> String {
        self.output.lock().clone()
    }

    /// Return the captured text and reset the capture
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.output.lock())
    }
}

impl Default for MemoryConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for MemoryConsole {
    fn is_interactive(&self) -> bool {
        self.interactive.load(Ordering::Relaxed)
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(LoggerError::writer("memory console closed"));
        }
        self.output.lock().push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
