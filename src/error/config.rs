//! Configuration errors

use super::VoiceAssetsError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
