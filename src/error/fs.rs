//! File system errors

use std::path::Path;

use super::VoiceAssetsError;

/// Creates a directory creation failed error
pub fn create_dir_failed(path: &Path, reason: impl ToString) -> VoiceAssetsError {
    VoiceAssetsError::CreateDirFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> VoiceAssetsError {
    VoiceAssetsError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::IoError {
        message: message.into(),
    }
}
