//! Logger metrics for observability
//!
//! Counters describing where log lines went: printed, buffered, deferred,
//! suppressed for lack of a terminal, or lost to a failing console.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_console_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_console_line();
/// metrics.record_buffered_line();
///
/// assert_eq!(metrics.console_lines(), 1);
/// assert_eq!(metrics.buffered_lines(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Writes that reached the console sink
    console_lines: AtomicU64,

    /// Writes appended to the main buffer
    buffered_lines: AtomicU64,

    /// Writes held back waiting for an error
    deferred_lines: AtomicU64,

    /// Console writes dropped because the context was not interactive
    suppressed_writes: AtomicU64,

    /// Times the deferred buffer was released by an error
    deferred_flushes: AtomicU64,

    /// Console writes that failed in the sink
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            console_lines: AtomicU64::new(0),
            buffered_lines: AtomicU64::new(0),
            deferred_lines: AtomicU64::new(0),
            suppressed_writes: AtomicU64::new(0),
            deferred_flushes: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn console_lines(&self) -> u64 {
        self.console_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn buffered_lines(&self) -> u64 {
        self.buffered_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn deferred_lines(&self) -> u64 {
        self.deferred_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_writes(&self) -> u64 {
        self.suppressed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn deferred_flushes(&self) -> u64 {
        self.deferred_flushes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Record a console write, returning the previous count
    #[inline]
    pub fn record_console_line(&self) -> u64 {
        self.console_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_buffered_line(&self) -> u64 {
        self.buffered_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_deferred_line(&self) -> u64 {
        self.deferred_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_deferred_flush(&self) -> u64 {
        self.deferred_flushes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.console_lines.store(0, Ordering::Relaxed);
        self.buffered_lines.store(0, Ordering::Relaxed);
        self.deferred_lines.store(0, Ordering::Relaxed);
        self.suppressed_writes.store(0, Ordering::Relaxed);
        self.deferred_flushes.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            console_lines: AtomicU64::new(self.console_lines()),
            buffered_lines: AtomicU64::new(self.buffered_lines()),
            deferred_lines: AtomicU64::new(self.deferred_lines()),
            suppressed_writes: AtomicU64::new(self.suppressed_writes()),
            deferred_flushes: AtomicU64::new(self.deferred_flushes()),
            failed_writes: AtomicU64::new(self.failed_writes()),
        }
    }
}
