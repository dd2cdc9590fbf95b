//! Bundle path utilities and constants
//!
//! This module provides the on-disk layout of a provisioned bundle:
//!
//! ```text
//! <data-dir>/
//! └── snips/
//!     ├── android_version_<version>
//!     └── assistant/
//!         └── <extracted assistant files>
//! ```

use std::path::{Path, PathBuf};

use crate::error::{VoiceAssetsError, Result};

/// Default data directory name under the user's local data directory
const DATA_DIR: &str = "voice-assets";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "VOICE_ASSETS_DATA_DIR";

/// Bundle subdirectory within the data directory
pub const BUNDLE_DIR: &str = "snips";

/// Subdirectory of the bundle holding the assistant configuration
pub const ASSISTANT_DIR: &str = "assistant";

/// Marker file name prefix; the full name is `<prefix>_<version>`
pub const MARKER_PREFIX: &str = "android_version";

/// Characters that may not appear in a version string, which becomes part of a file name
const VERSION_UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

/// Get the default data directory path
///
/// Uses the platform's local data location (e.g. XDG on Linux, Library/Application Support
/// on macOS) with a `voice-assets` subdirectory. Can be overridden with the
/// `VOICE_ASSETS_DATA_DIR` environment variable.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_local_dir().ok_or_else(|| VoiceAssetsError::ConfigInvalid {
        message: "Could not determine local data directory".to_string(),
    })?;

    Ok(base.join(DATA_DIR))
}

/// Path to the bundle root inside a data directory
pub fn bundle_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(BUNDLE_DIR)
}

/// Path to the assistant directory inside a bundle root
pub fn assistant_dir(bundle_dir: &Path) -> PathBuf {
    bundle_dir.join(ASSISTANT_DIR)
}

/// File name of the marker for `version`
pub fn marker_name(version: &str) -> String {
    format!("{MARKER_PREFIX}_{version}")
}

/// Path of the marker for `version` inside a bundle root
pub fn marker_path(bundle_dir: &Path, version: &str) -> PathBuf {
    bundle_dir.join(marker_name(version))
}

/// Extract the version from a marker file name, if it is one
pub fn version_from_marker(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(MARKER_PREFIX)
        .and_then(|rest| rest.strip_prefix('_'))
        .filter(|version| !version.is_empty())
}

/// Reject versions that cannot be embedded in a marker file name
pub fn validate_version(version: &str) -> Result<()> {
    let trimmed = version.trim();
    if trimmed.is_empty()
        || trimmed != version
        || version == "."
        || version == ".."
        || version.contains(VERSION_UNSAFE_CHARS)
    {
        return Err(VoiceAssetsError::InvalidVersion {
            version: version.to_string(),
        });
    }
    Ok(())
}
