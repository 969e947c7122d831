//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON rendering error (dump)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Console writer error
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a writer error
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileLockError {
            path: path.into(),
            source,
        }
    }

    /// The underlying IO error, if this error carries one
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            LoggerError::IoOperation { source, .. } => Some(source),
            LoggerError::IoError(err) => Some(err),
            LoggerError::FileLockError { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::writer("stdout closed");
        assert!(matches!(err, LoggerError::WriterError(_)));

        let busy = std::io::Error::new(std::io::ErrorKind::WouldBlock, "busy");
        let err = LoggerError::file_lock("/tmp/app.log", busy);
        assert!(matches!(err, LoggerError::FileLockError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::writer("broken pipe");
        assert_eq!(err.to_string(), "Writer error: broken pipe");

        let busy = std::io::Error::new(std::io::ErrorKind::WouldBlock, "busy");
        let err = LoggerError::file_lock("/tmp/app.log", busy);
        assert_eq!(
            err.to_string(),
            "Failed to acquire file lock on '/tmp/app.log'"
        );
        assert_eq!(
            err.io_source().map(|e| e.kind()),
            Some(std::io::ErrorKind::WouldBlock)
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("saving log buffer", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("saving log buffer"));
        assert!(err.to_string().contains("cannot write to file"));
        assert_eq!(
            err.io_source().map(|e| e.kind()),
            Some(std::io::ErrorKind::PermissionDenied)
        );
    }

    #[test]
    fn test_io_source_absent() {
        assert!(LoggerError::writer("x").io_source().is_none());
    }
}
