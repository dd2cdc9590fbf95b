//! Error types and handling for voice-assets
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`archive`]: Archive reading and extraction errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`platform`]: Platform client errors

pub mod archive;
pub mod config;
pub mod fs;
pub mod platform;

pub use archive::{
    entry_failed as archive_entry_failed, open_failed as archive_open_failed,
    path_traversal as archive_path_traversal,
};
pub use config::{
    invalid as config_invalid, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{create_dir_failed, io_error, write_failed as file_write_failed};
pub use platform::call_failed as platform_call_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for voice-assets operations
#[derive(Error, Diagnostic, Debug)]
pub enum VoiceAssetsError {
    // Archive errors
    #[error("Failed to open archive: {archive}")]
    #[diagnostic(
        code(voice_assets::archive::open_failed),
        help("Check that the archive path is correct and readable")
    )]
    ArchiveOpenFailed { archive: String, reason: String },

    #[error("Failed to read archive entry: {reason}")]
    #[diagnostic(code(voice_assets::archive::entry_failed))]
    ArchiveEntryFailed { reason: String },

    #[error("Archive entry escapes the target directory: {entry}")]
    #[diagnostic(
        code(voice_assets::archive::path_traversal),
        help("Archive entries must use relative paths without '..' components")
    )]
    PathTraversal { entry: String },

    // Provisioning errors
    #[error("Invalid bundle version: '{version}'")]
    #[diagnostic(
        code(voice_assets::provision::invalid_version),
        help("Versions are used in file names and must not contain path separators")
    )]
    InvalidVersion { version: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(voice_assets::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(voice_assets::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(voice_assets::config::invalid))]
    ConfigInvalid { message: String },

    // Platform errors
    #[error("Platform call '{call}' failed: {reason}")]
    #[diagnostic(code(voice_assets::platform::call_failed))]
    PlatformCallFailed { call: String, reason: String },

    // File system errors
    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(voice_assets::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(voice_assets::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(voice_assets::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for VoiceAssetsError {
    fn from(err: std::io::Error) -> Self {
        VoiceAssetsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for VoiceAssetsError {
    fn from(err: zip::result::ZipError) -> Self {
        VoiceAssetsError::ArchiveEntryFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for VoiceAssetsError {
    fn from(err: serde_yaml::Error) -> Self {
        VoiceAssetsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VoiceAssetsError {
    fn from(err: serde_json::Error) -> Self {
        VoiceAssetsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, VoiceAssetsError>;
