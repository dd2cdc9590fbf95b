//! Archive errors

use super::VoiceAssetsError;

/// Creates an archive open failed error
pub fn open_failed(archive: impl Into<String>, reason: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::ArchiveOpenFailed {
        archive: archive.into(),
        reason: reason.into(),
    }
}

/// Creates an archive entry failed error
pub fn entry_failed(reason: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::ArchiveEntryFailed {
        reason: reason.into(),
    }
}

/// Creates a path traversal error for an entry name
pub fn path_traversal(entry: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::PathTraversal {
        entry: entry.into(),
    }
}
