//! Output destinations the logger writes through

use super::error::Result;

/// Terminal-like text stream receiving colored output
///
/// The logger asks [`is_interactive`](ConsoleSink::is_interactive) before
/// every console write and drops the text silently when it returns `false`.
pub trait ConsoleSink: Send {
    fn is_interactive(&self) -> bool;
    fn write_str(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// How [`SaveTarget::persist`] treats existing content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Create the destination or replace its content
    #[default]
    Overwrite,
    /// Create the destination or add to its end
    Append,
}

impl SaveMode {
    pub fn from_append(append: bool) -> Self {
        if append {
            SaveMode::Append
        } else {
            SaveMode::Overwrite
        }
    }
}

/// Byte destination for [`Logger::save_to`](crate::Logger::save_to)
pub trait SaveTarget {
    /// Write `bytes` in `mode`, returning the number of bytes written
    fn persist(&mut self, bytes: &[u8], mode: SaveMode) -> Result<usize>;
}
