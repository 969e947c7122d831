//! Console and persistence sink implementations

pub mod console;
pub mod file;

pub use console::{MemoryConsole, StdoutConsole};
pub use file::FileTarget;

// Re-export traits so sinks can be implemented from this module alone
pub use crate::core::{ConsoleSink, SaveTarget};
