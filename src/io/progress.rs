//! Progress display for batch processing and palette loading

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for batch operations
///
/// Small batches get one line per file; larger batches add a single batch
/// bar and only show the most recent files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Display names in processing order, empty until a file starts
    file_states: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static PALETTE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Palette: [{bar:40.green/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new_spinner();
            bar.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Bar that tracks palette images as they are decoded
    pub fn palette_bar(&self) -> ProgressBar {
        let bar = ProgressBar::new(0);
        bar.set_style(PALETTE_STYLE.clone());
        self.multi_progress.add(bar)
    }

    /// Show a file as in progress
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, String::new());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = display_name;
        }
        self.update_bars(index, "generating");
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        self.update_bars(index, &format!("✓ {:.2}s", elapsed.as_secs_f64()));
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        for bar in &self.file_bars {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent files, newest in the last slot
    fn update_bars(&self, index: usize, status: &str) {
        let started = self.file_states.iter().filter(|name| !name.is_empty()).count();
        let first_visible = started.saturating_sub(self.file_bars.len());

        for (bar_idx, name) in self
            .file_states
            .iter()
            .filter(|name| !name.is_empty())
            .skip(first_visible)
            .enumerate()
        {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_prefix(name.clone());
                if bar_idx + first_visible == index {
                    bar.set_message(status.to_string());
                }
                bar.tick();
            }
        }
    }
}
