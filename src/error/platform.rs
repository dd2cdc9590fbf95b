//! Platform client errors

use super::VoiceAssetsError;

/// Creates a platform call failed error
pub fn call_failed(call: impl Into<String>, reason: impl Into<String>) -> VoiceAssetsError {
    VoiceAssetsError::PlatformCallFailed {
        call: call.into(),
        reason: reason.into(),
    }
}
