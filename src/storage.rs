//! Filesystem storage for uploaded recordings.
//!
//! All stored state is a single flat directory of `<uuid>.webm` files. There is
//! no index or metadata record - the filesystem entry is the only persisted
//! state for a recording.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::StorageConfig;

/// Extension every stored recording is persisted under, regardless of the
/// client-supplied filename.
pub const STORED_EXTENSION: &str = "webm";

/// Handle to the recording storage directory.
///
/// Cheap to clone; shared across request handlers via application state.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    allowed_extensions: Vec<String>,
}

/// Outcome of a [`MediaStore::clear`] pass. Per-entry failures are collected
/// rather than aborting the batch.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed: usize,
    pub failures: Vec<RemovalFailure>,
}

/// A single entry that could not be deleted during cleanup.
#[derive(Debug)]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub error: std::io::Error,
}

impl MediaStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.dir.clone(),
            allowed_extensions: config.allowed_extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        }
    }

    /// Root directory holding stored recordings
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage directory if it does not exist yet.
    ///
    /// Invariant: the directory exists before any upload or read is attempted.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    /// Check a client-supplied filename against the configured extension set
    /// (case-insensitive). Filenames without an extension are rejected.
    pub fn has_allowed_extension(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }

    /// Persist an uploaded recording under a freshly generated name.
    ///
    /// Returns the generated `<uuid>.webm` filename on success.
    pub async fn save(&self, data: &[u8]) -> std::io::Result<String> {
        let filename = format!("{}.{STORED_EXTENSION}", Uuid::new_v4());
        fs::write(self.root.join(&filename), data).await?;
        Ok(filename)
    }

    /// Delete every entry in the storage directory, best-effort.
    ///
    /// Each entry is attempted independently; failures are recorded in the
    /// returned report and logged, and never abort the batch.
    pub async fn clear(&self) -> std::io::Result<CleanupReport> {
        let mut report = CleanupReport::default();

        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            match fs::remove_file(&path).await {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed stored recording");
                    report.removed += 1;
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "Failed to remove stored recording");
                    report.failures.push(RemovalFailure { path, error });
                }
            }
        }

        Ok(report)
    }

    /// Resolve a retrieval filename to a path inside the storage directory.
    ///
    /// Returns `None` for anything that could escape the directory: empty
    /// names, embedded path separators, parent-directory components, absolute
    /// paths. The resolved path is always `root/<single normal component>`.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return None;
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(name)),
            _ => None,
        }
    }
}
