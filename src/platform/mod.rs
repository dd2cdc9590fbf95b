//! Voice platform session bootstrap
//!
//! The voice platform (hotword spotting, recognition, NLU, dialogue) is an
//! external component. This module only defines the contract it is driven
//! through, builds its configuration from a provisioned bundle, and forwards
//! its events into logging.
//!
//! Events reach the session as [`PlatformEvent`] values, either one at a time
//! through [`SessionHandle::dispatch`] or drained from a channel fed by the
//! platform's own threads with [`SessionHandle::pump`].

pub mod events;
pub mod loopback;
pub mod options;
pub mod session;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use events::{IntentClassifierResult, IntentMessage, PlatformError, PlatformEvent, StartSession};
pub use loopback::{ClientCall, LoopbackClient};
pub use options::{ClientConfig, ClientOptions};
pub use session::{SessionHandle, create_session};

/// Application-wide context a client is connected to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    /// Application-private storage root
    pub data_dir: PathBuf,
}

impl AppContext {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Calls the session makes into the external platform
pub trait PlatformClient {
    /// Start audio capture and recognition
    fn connect(&self, context: &AppContext) -> Result<()>;

    /// Open a new dialogue session
    fn start_session(&self, request: StartSession) -> Result<()>;

    /// Close the session with `session_id`, optionally speaking `text`
    fn end_session(&self, session_id: &str, text: Option<&str>) -> Result<()>;
}
