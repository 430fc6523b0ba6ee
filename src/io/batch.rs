//! Per-run success/failure tally shared by the batch commands

use crate::io::error::{ArtError, Result};
use tracing::{info, warn};

/// Running totals for one batch operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Items completed
    pub succeeded: usize,
    /// Items that failed and were skipped
    pub failed: usize,
    /// Input bytes of completed items
    pub bytes_before: u64,
    /// Output bytes of completed items
    pub bytes_after: u64,
}

impl BatchSummary {
    /// Record a completed item that has no size to compare
    pub const fn record_completed(&mut self) {
        self.succeeded += 1;
    }

    /// Record a completed item and its sizes
    pub const fn record_success(&mut self, bytes_before: u64, bytes_after: u64) {
        self.succeeded += 1;
        self.bytes_before += bytes_before;
        self.bytes_after += bytes_after;
    }

    /// Record a failed item, logging it with its identifying label
    pub fn record_failure(&mut self, item: &str, error: &ArtError) {
        self.failed += 1;
        warn!(item, %error, "item failed");
    }

    /// Items seen so far
    pub const fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Overall byte reduction in percent, if any bytes were processed
    pub fn reduction_percent(&self) -> Option<f64> {
        (self.bytes_before > 0).then(|| {
            (self.bytes_before as f64 - self.bytes_after as f64) / self.bytes_before as f64 * 100.0
        })
    }

    /// Log the end-of-run totals and turn any failures into an error
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::BatchIncomplete`] if at least one item failed
    pub fn finish(self, operation: &'static str) -> Result<Self> {
        info!(
            operation,
            total = self.total(),
            succeeded = self.succeeded,
            failed = self.failed,
            "batch complete"
        );
        if let Some(reduction) = self.reduction_percent() {
            info!(
                operation,
                bytes_before = self.bytes_before,
                bytes_after = self.bytes_after,
                saved = self.bytes_before.saturating_sub(self.bytes_after),
                "total size reduction {reduction:.1}%"
            );
        }

        if self.failed > 0 {
            Err(ArtError::BatchIncomplete {
                operation,
                succeeded: self.succeeded,
                failed: self.failed,
            })
        } else {
            Ok(self)
        }
    }
}
