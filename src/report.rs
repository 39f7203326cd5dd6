// Run reporting
//
// The Reporter owns the user-facing stdout lines; RunSummary tracks the counts
// behind them and logs the detailed breakdown through tracing.

use camino::Utf8Path;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Marker printed in front of every rewritten file
pub const CHANGED_MARKER: &str = "✓";

/// Counts accumulated over one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Candidate files visited
    pub scanned: usize,

    /// Files rewritten on disk
    pub changed: usize,

    /// Token occurrences replaced across all rewritten files
    pub replacements: usize,

    start_time: Instant,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            scanned: 0,
            changed: 0,
            replacements: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_unchanged(&mut self) {
        self.scanned += 1;
    }

    pub fn record_rewritten(&mut self, replacements: usize) {
        self.scanned += 1;
        self.changed += 1;
        self.replacements += replacements;
    }

    pub fn unchanged(&self) -> usize {
        self.scanned - self.changed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn log_summary(&self) {
        tracing::info!(
            "Run finished in {:.2}s: {} scanned, {} changed, {} unchanged, {} replacement(s)",
            self.elapsed().as_secs_f64(),
            self.scanned,
            self.changed,
            self.unchanged(),
            self.replacements
        );
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the human-readable run report.
///
/// One `✓ <name>` line per rewritten file, then a blank line and
/// `Updated <n> <label>` once every candidate has been processed.
pub struct Reporter<W: Write> {
    out: W,
    label: String,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, label: impl Into<String>) -> Self {
        Self {
            out,
            label: label.into(),
        }
    }

    /// Report a rewritten file by its base name
    pub fn file_changed(&mut self, path: &Utf8Path) -> io::Result<()> {
        let name = path.file_name().unwrap_or(path.as_str());
        writeln!(self.out, "{} {}", CHANGED_MARKER, name)
    }

    pub fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Updated {} {}", summary.changed, self.label)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
