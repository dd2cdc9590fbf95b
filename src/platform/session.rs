//! Session handle and event handlers

use std::path::Path;

use crossbeam_channel::Receiver;

use super::{AppContext, ClientConfig, IntentMessage, PlatformClient, PlatformError, PlatformEvent, StartSession};
use crate::error::Result;

const LOG_TARGET: &str = "voice_assets::platform";

/// A constructed platform client together with the configuration it was built from
///
/// The handle holds no state of its own beyond the client: every event is
/// forwarded to logging or turned into a single client call.
pub struct SessionHandle<C> {
    client: C,
    config: ClientConfig,
}

/// Build a client pointed at the provisioned `bundle_dir`
///
/// `build` receives the fixed client configuration and constructs the
/// external client from it.
pub fn create_session<C, F>(bundle_dir: &Path, build: F) -> Result<SessionHandle<C>>
where
    C: PlatformClient,
    F: FnOnce(&ClientConfig) -> Result<C>,
{
    let config = ClientConfig::for_bundle(bundle_dir);
    tracing::debug!(
        assistant_dir = %config.assistant_dir.display(),
        options = ?config.options,
        "creating platform client"
    );
    let client = build(&config)?;
    Ok(SessionHandle { client, config })
}

impl<C: PlatformClient> SessionHandle<C> {
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Connect the client to the application context
    pub fn connect(&self, context: &AppContext) -> Result<()> {
        self.client.connect(context)
    }

    /// Handle one platform event
    pub fn dispatch(&self, event: &PlatformEvent) {
        match event {
            PlatformEvent::Ready => on_ready(),
            PlatformEvent::Error(error) => on_error(error),
            PlatformEvent::HotwordDetected => on_hotword_detected(&self.client),
            PlatformEvent::IntentDetected(intent) => on_intent_detected(&self.client, intent),
            PlatformEvent::LogLine { line } => on_log_line(line),
        }
    }

    /// Dispatch events until every sender has been dropped, returning how many were handled
    pub fn pump(&self, events: &Receiver<PlatformEvent>) -> usize {
        let mut handled = 0;
        for event in events {
            self.dispatch(&event);
            handled += 1;
        }
        handled
    }
}

fn on_ready() {
    tracing::info!(target: LOG_TARGET, "platform is ready, say the wake word");
}

fn on_error(error: &PlatformError) {
    tracing::error!(target: LOG_TARGET, "platform error: {}", error.message);
}

fn on_hotword_detected(client: &impl PlatformClient) {
    tracing::info!(target: LOG_TARGET, "wake word detected");
    if let Err(e) = client.start_session(StartSession::on_wake_word()) {
        tracing::warn!(target: LOG_TARGET, error = %e, "failed to start session");
    }
}

fn on_intent_detected(client: &impl PlatformClient, intent: &IntentMessage) {
    if let Err(e) = client.end_session(&intent.session_id, None) {
        tracing::warn!(
            target: LOG_TARGET,
            session_id = %intent.session_id,
            error = %e,
            "failed to end session"
        );
    }
    tracing::info!(target: LOG_TARGET, "intent detected: {}", intent.intent.intent_name);
}

fn on_log_line(line: &str) {
    tracing::info!(target: LOG_TARGET, "log: {line}");
}
