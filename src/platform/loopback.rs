//! In-process platform client that replays a scripted event sequence
//!
//! Used by the `run` command and by tests in place of a real voice platform.
//! On `connect` a worker thread emits `ready` followed by the script, then
//! drops its sender so that [`SessionHandle::pump`](super::SessionHandle::pump)
//! returns once the script is exhausted.

use std::path::Path;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

use super::{AppContext, ClientConfig, PlatformClient, PlatformEvent, StartSession};
use crate::error::{Result, config_parse_failed, config_read_failed, platform_call_failed};

/// A call received by the loopback client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCall {
    Connect,
    StartSession(StartSession),
    EndSession {
        session_id: String,
        text: Option<String>,
    },
}

pub struct LoopbackClient {
    config: ClientConfig,
    script: Vec<PlatformEvent>,
    calls: Mutex<Vec<ClientCall>>,
    sender: Mutex<Option<Sender<PlatformEvent>>>,
    receiver: Receiver<PlatformEvent>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl LoopbackClient {
    pub fn new(config: ClientConfig, script: Vec<PlatformEvent>) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            config,
            script,
            calls: Mutex::new(Vec::new()),
            sender: Mutex::new(Some(sender)),
            receiver,
            worker: Mutex::new(None),
        }
    }

    /// Read an event script from a YAML file
    pub fn load_script(path: &Path) -> Result<Vec<PlatformEvent>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Channel the worker thread publishes events on
    ///
    /// Iterating it blocks until `connect` has been called and the script has
    /// been fully emitted.
    pub fn events(&self) -> &Receiver<PlatformEvent> {
        &self.receiver
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.lock().clone()
    }

    /// Wait for the worker thread to finish emitting
    pub fn join(&self) {
        if let Some(worker) = self.worker.lock().take() {
            if worker.join().is_err() {
                tracing::warn!("loopback worker panicked");
            }
        }
    }

    fn record(&self, call: ClientCall) {
        self.calls.lock().push(call);
    }
}

impl PlatformClient for LoopbackClient {
    fn connect(&self, context: &AppContext) -> Result<()> {
        let sender = self
            .sender
            .lock()
            .take()
            .ok_or_else(|| platform_call_failed("connect", "client is already connected"))?;
        self.record(ClientCall::Connect);

        tracing::debug!(
            data_dir = %context.data_dir().display(),
            events = self.script.len(),
            "loopback client connected"
        );

        let script = self.script.clone();
        let worker = thread::Builder::new()
            .name("loopback-platform".to_string())
            .spawn(move || {
                if sender.send(PlatformEvent::Ready).is_err() {
                    return;
                }
                for event in script {
                    if sender.send(event).is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| platform_call_failed("connect", e.to_string()))?;

        *self.worker.lock() = Some(worker);
        Ok(())
    }

    fn start_session(&self, request: StartSession) -> Result<()> {
        self.record(ClientCall::StartSession(request));
        Ok(())
    }

    fn end_session(&self, session_id: &str, text: Option<&str>) -> Result<()> {
        self.record(ClientCall::EndSession {
            session_id: session_id.to_string(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}
