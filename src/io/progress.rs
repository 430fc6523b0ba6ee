//! Batch progress display for multi-file runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the items of one batch, or nothing when quiet
pub struct ProgressManager {
    show: bool,
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager; with `show` false it displays nothing
    pub const fn new(show: bool) -> Self {
        Self { show, bar: None }
    }

    /// Create a manager that never displays anything
    pub const fn hidden() -> Self {
        Self::new(false)
    }

    /// Start the bar for `item_count` items labelled `operation`
    pub fn initialize(&mut self, operation: &str, item_count: usize) {
        if !self.show || item_count == 0 {
            self.bar = None;
            return;
        }
        let bar = ProgressBar::new(item_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix(operation.to_string());
        self.bar = Some(bar);
    }

    /// Show the item currently being worked on
    pub fn start_item(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// Advance past one item, finished or failed
    pub fn complete_item(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Whether a bar is currently displayed
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}
