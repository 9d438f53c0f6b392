//! Diagnostic capture of upstream responses that no longer match the
//! expected format.
//!
//! Extractors report to a [`Diagnostics`] collaborator instead of touching
//! the filesystem, so the capture policy is chosen at startup.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

/// A response body worth keeping for offline inspection.
#[derive(Debug, Clone, Copy)]
pub struct Capture<'a> {
    /// Source that produced the body.
    pub source_id: &'a str,
    /// Why the body was captured.
    pub reason: &'a str,
    /// The raw response body.
    pub body: &'a str,
}

/// Sink for diagnostic captures. Implementations must not fail the caller.
pub trait Diagnostics: Send + Sync {
    fn capture(&self, capture: &Capture<'_>);
}

/// Logs captures through `tracing`. The full body is emitted at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn capture(&self, capture: &Capture<'_>) {
        warn!(
            source = capture.source_id,
            reason = capture.reason,
            bytes = capture.body.len(),
            "Captured unexpected response"
        );
        debug!(source = capture.source_id, body = capture.body);
    }
}

/// Writes each captured body to `<dir>/<source_id>-<unix millis>-<seq>.html`.
///
/// `seq` counts captures made by this sink, so bodies captured within the
/// same millisecond never overwrite each other. The write runs synchronously
/// on the calling task.
#[derive(Debug)]
pub struct DirDiagnostics {
    dir: PathBuf,
    seq: AtomicU64,
}

impl DirDiagnostics {
    /// Creates a sink writing into `dir`. The directory is created on first
    /// capture if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            seq: AtomicU64::new(0),
        }
    }

    /// Returns the target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write(&self, capture: &Capture<'_>) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let path = self
            .dir
            .join(format!("{}-{}-{}.html", capture.source_id, millis, seq));
        std::fs::write(&path, capture.body)?;
        Ok(path)
    }
}

impl Diagnostics for DirDiagnostics {
    fn capture(&self, capture: &Capture<'_>) {
        match self.write(capture) {
            Ok(path) => info!(
                source = capture.source_id,
                reason = capture.reason,
                "Saved unexpected response to {}",
                path.display()
            ),
            Err(e) => warn!(
                source = capture.source_id,
                "Failed to save unexpected response in {}: {}",
                self.dir.display(),
                e
            ),
        }
    }
}
