//! File save target

use crate::core::{LoggerError, Result, SaveMode, SaveTarget};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persists buffered log text to a file path
///
/// With the `file` feature the file is exclusively locked for the duration of
/// the write. A file already locked by another saver fails with
/// [`LoggerError::FileLockError`] instead of waiting.
///
/// # Examples
///
/// ```no_run
/// use rust_console_log::appenders::FileTarget;
/// use rust_console_log::core::{SaveMode, SaveTarget};
///
/// let mut target = FileTarget::new("/var/log/app.log");
/// target.persist(b"hello\n", SaveMode::Append).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileTarget {
    path: PathBuf,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, operation: &str, source: std::io::Error) -> LoggerError {
        LoggerError::io_operation(
            operation,
            format!("cannot write '{}'", self.path.display()),
            source,
        )
    }
}

impl SaveTarget for FileTarget {
    fn persist(&mut self, bytes: &[u8], mode: SaveMode) -> Result<usize> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            SaveMode::Append => options.append(true),
            SaveMode::Overwrite => options.write(true).truncate(false),
        };

        let mut file = options
            .open(&self.path)
            .map_err(|e| self.io_error("opening log file", e))?;

        #[cfg(feature = "file")]
        fs2::FileExt::try_lock_exclusive(&file)
            .map_err(|e| LoggerError::file_lock(self.path.display().to_string(), e))?;

        // Truncate only once the lock is held
        if mode == SaveMode::Overwrite {
            file.set_len(0)
                .map_err(|e| self.io_error("truncating log file", e))?;
        }

        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| self.io_error("saving log buffer", e))?;

        #[cfg(feature = "file")]
        if let Err(e) = fs2::FileExt::unlock(&file) {
            eprintln!(
                "[LOGGER WARNING] Failed to unlock '{}': {}",
                self.path.display(),
                e
            );
        }

        Ok(bytes.len())
    }
}
