//! Client configuration handed to the platform at construction

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::provision::paths;

/// The fixed option set the assistant runs with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClientOptions {
    pub dialogue: bool,
    pub hotword: bool,
    /// HTML watch output for debugging tools
    pub watch_output: bool,
    pub logs: bool,
    pub hotword_sensitivity: f32,
    /// Streaming of captured audio to an external consumer
    pub audio_streaming: bool,
    /// Runtime vocabulary injection
    pub injection: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            dialogue: true,
            hotword: true,
            watch_output: false,
            logs: true,
            hotword_sensitivity: 0.5,
            audio_streaming: false,
            injection: false,
        }
    }
}

/// Everything a platform client needs to be constructed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientConfig {
    /// `<bundle>/assistant`
    pub assistant_dir: PathBuf,
    pub options: ClientOptions,
}

impl ClientConfig {
    /// Configuration for a provisioned bundle root
    pub fn for_bundle(bundle_dir: &Path) -> Self {
        Self {
            assistant_dir: paths::assistant_dir(bundle_dir),
            options: ClientOptions::default(),
        }
    }
}
