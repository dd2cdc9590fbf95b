//! Bundle inspection and removal
//!
//! Backs the `status` and `clean` commands.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use super::paths::{self, ASSISTANT_DIR};
use crate::error::{Result, io_error};

/// Snapshot of a bundle directory
#[derive(Debug, Clone, Serialize)]
pub struct BundleStatus {
    pub bundle_dir: PathBuf,
    /// Version that was asked about
    pub version: String,
    /// Marker for `version` exists
    pub provisioned: bool,
    /// Versions with a marker on disk, sorted
    pub markers: Vec<String>,
    /// Whether the assistant subdirectory exists
    pub assistant_present: bool,
    /// Regular files in the tree, markers excluded
    pub files: usize,
    /// Total size of those files in bytes
    pub total_size: u64,
}

impl BundleStatus {
    /// Format size as human-readable string
    pub fn formatted_size(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let size = self.total_size as f64;
        if size < 1024.0 {
            format!("{} B", self.total_size)
        } else if size < 1024.0 * 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else if size < 1024.0 * 1024.0 * 1024.0 {
            format!("{:.1} MB", size / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
        }
    }
}

/// Inspect the bundle directory without modifying it
pub fn inspect(bundle_dir: &Path, version: &str) -> Result<BundleStatus> {
    let mut status = BundleStatus {
        bundle_dir: bundle_dir.to_path_buf(),
        version: version.to_string(),
        provisioned: paths::marker_path(bundle_dir, version).is_file(),
        markers: Vec::new(),
        assistant_present: bundle_dir.join(ASSISTANT_DIR).is_dir(),
        files: 0,
        total_size: 0,
    };

    if !bundle_dir.is_dir() {
        return Ok(status);
    }

    for entry in fs::read_dir(bundle_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(v) = entry.file_name().to_str().and_then(paths::version_from_marker) {
            status.markers.push(v.to_string());
        }
    }
    status.markers.sort();

    for entry in WalkDir::new(bundle_dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let is_marker = entry.depth() == 1
            && entry
                .file_name()
                .to_str()
                .and_then(paths::version_from_marker)
                .is_some();
        if is_marker {
            continue;
        }
        status.files += 1;
        status.total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
    }

    Ok(status)
}

/// Remove the whole bundle tree, markers included
///
/// Returns `false` if there was nothing to remove.
pub fn remove_bundle(bundle_dir: &Path) -> Result<bool> {
    if !bundle_dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(bundle_dir).map_err(|e| {
        io_error(format!(
            "Failed to remove bundle directory {}: {}",
            bundle_dir.display(),
            e
        ))
    })?;
    tracing::info!(bundle_dir = %bundle_dir.display(), "bundle removed");
    Ok(true)
}
