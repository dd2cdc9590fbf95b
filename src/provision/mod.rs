//! Versioned asset provisioning
//!
//! Ensures the assistant bundle for a given version is extracted to local
//! storage exactly once. A marker file named after the version is written
//! after a successful extraction; while it exists the bundle is considered
//! complete and the archive is never opened.
//!
//! Failed extractions leave no marker, so the next call starts over. Partial
//! output from a failed attempt is left in place and overwritten by the retry.

pub mod archive;
pub mod extract;
pub mod paths;
pub mod status;

use std::fs::{self, File};
use std::path::Path;

use crate::error::{Result, archive_open_failed, create_dir_failed, file_write_failed};

pub use archive::{ArchiveSource, ArchiveStream, FileArchive, MemoryArchive};
pub use extract::{EntryKind, ExtractedEntry, ProvisionReport};
pub use paths::{ASSISTANT_DIR, BUNDLE_DIR, MARKER_PREFIX, marker_path};
pub use status::{BundleStatus, inspect, remove_bundle};

/// Result of [`ensure_provisioned`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Marker for this version already present, nothing was read
    AlreadyProvisioned,
    /// The archive was extracted and the marker written
    Extracted(ProvisionReport),
    /// Extraction failed; no marker was written
    Failed,
}

impl ProvisionOutcome {
    /// Whether the bundle is usable after this call
    pub fn is_ready(&self) -> bool {
        !matches!(self, ProvisionOutcome::Failed)
    }
}

/// Ensure the bundle for `version` is present in `bundle_dir`
///
/// Never fails from the caller's perspective: errors are logged and reported
/// as [`ProvisionOutcome::Failed`].
pub fn ensure_provisioned(
    bundle_dir: &Path,
    version: &str,
    source: &dyn ArchiveSource,
) -> ProvisionOutcome {
    match try_provision(bundle_dir, version, source) {
        Ok(None) => ProvisionOutcome::AlreadyProvisioned,
        Ok(Some(report)) => ProvisionOutcome::Extracted(report),
        Err(e) => {
            tracing::warn!(
                bundle_dir = %bundle_dir.display(),
                version,
                error = %e,
                "asset extraction failed, will retry on next start"
            );
            ProvisionOutcome::Failed
        }
    }
}

/// Fallible form of [`ensure_provisioned`]
///
/// Returns `Ok(None)` when the marker for `version` already exists.
pub fn try_provision(
    bundle_dir: &Path,
    version: &str,
    source: &dyn ArchiveSource,
) -> Result<Option<ProvisionReport>> {
    try_provision_with(bundle_dir, version, source, &mut |_: &ExtractedEntry<'_>| {})
}

/// [`try_provision`] with a per-entry observer, used for progress display
pub fn try_provision_with(
    bundle_dir: &Path,
    version: &str,
    source: &dyn ArchiveSource,
    observer: &mut dyn FnMut(&ExtractedEntry<'_>),
) -> Result<Option<ProvisionReport>> {
    paths::validate_version(version)?;

    let marker = marker_path(bundle_dir, version);
    if marker.exists() {
        tracing::debug!(marker = %marker.display(), "bundle already provisioned");
        return Ok(None);
    }

    // Only removes an empty directory; leftovers from older versions stay.
    if let Err(e) = fs::remove_dir(bundle_dir) {
        tracing::trace!(error = %e, "bundle directory not removed");
    }

    tracing::info!(
        archive = %source.describe(),
        bundle_dir = %bundle_dir.display(),
        version,
        "extracting assistant bundle"
    );

    let stream = source
        .open()
        .map_err(|e| archive_open_failed(source.describe(), e.to_string()))?;

    fs::create_dir_all(bundle_dir).map_err(|e| create_dir_failed(bundle_dir, e))?;
    let report = extract::unzip(stream, bundle_dir, observer)?;

    File::create(&marker).map_err(|e| file_write_failed(&marker, e))?;

    tracing::info!(
        files = report.files,
        directories = report.directories,
        bytes = report.bytes,
        "assistant bundle extracted"
    );

    Ok(Some(report))
}
