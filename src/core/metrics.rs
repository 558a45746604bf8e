//! Pipe metrics
//!
//! Counters describing what a [`Pipe`](crate::Pipe) delivered to its sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for one pipe
///
/// # Example
///
/// ```
/// use scoped_logger::PipeMetrics;
///
/// let metrics = PipeMetrics::new();
/// metrics.record_written(12);
/// metrics.record_failed();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.bytes_written(), 12);
/// assert_eq!(metrics.failed_count(), 1);
/// ```
#[derive(Debug)]
pub struct PipeMetrics {
    /// Messages handed to the sink successfully
    written_count: AtomicU64,

    /// Messages the sink failed to take (error or panic)
    failed_count: AtomicU64,

    bytes_written: AtomicU64,
}

impl PipeMetrics {
    pub const fn new() -> Self {
        Self {
            written_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    /// Record a delivered message of `bytes` length
    #[inline]
    pub fn record_written(&self, bytes: usize) {
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
        self.written_count.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed(&self) {
        self.failed_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for PipeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PipeMetrics {
    /// Snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            written_count: AtomicU64::new(self.written_count()),
            failed_count: AtomicU64::new(self.failed_count()),
            bytes_written: AtomicU64::new(self.bytes_written()),
        }
    }
}
