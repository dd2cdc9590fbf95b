//! Startup sequence: provision, check permission, bootstrap
//!
//! Provisioning always runs first. The session is only created once the
//! microphone permission is known to be granted, either immediately or when
//! the asynchronous permission answer arrives.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::permission::{
    Permission, PermissionGate, PermissionRequest, PermissionResult, allows_session,
};
use crate::platform::{AppContext, ClientConfig, PlatformClient, SessionHandle, create_session};
use crate::provision::{ArchiveSource, ProvisionOutcome, ensure_provisioned};

/// Where the launcher stands after a step
pub enum LaunchState<C> {
    /// Session created and connected
    Running(SessionHandle<C>),
    /// Permission requested; waiting for [`Launcher::on_permission_result`]
    AwaitingPermission,
    /// Permission refused; nothing else will happen until the next start
    Denied,
}

impl<C> LaunchState<C> {
    pub fn is_running(&self) -> bool {
        matches!(self, LaunchState::Running(_))
    }
}

/// Outcome of [`Launcher::start`]
pub struct Startup<C> {
    pub provision: ProvisionOutcome,
    pub state: LaunchState<C>,
}

pub struct Launcher<'a, G> {
    bundle_dir: PathBuf,
    version: String,
    archive: &'a dyn ArchiveSource,
    gate: G,
    context: AppContext,
}

impl<'a, G: PermissionGate> Launcher<'a, G> {
    pub fn new(settings: &Settings, archive: &'a dyn ArchiveSource, gate: G) -> Self {
        Self {
            bundle_dir: settings.bundle_dir(),
            version: settings.version.clone(),
            archive,
            gate,
            context: AppContext::new(&settings.data_dir),
        }
    }

    /// Provision, then bootstrap if the microphone is already granted
    ///
    /// A failed provisioning does not stop the launch; the platform reports
    /// the missing assistant through its own error event.
    pub fn start<C, F>(&self, build: F) -> Result<Startup<C>>
    where
        C: PlatformClient,
        F: FnOnce(&ClientConfig) -> Result<C>,
    {
        let provision = ensure_provisioned(&self.bundle_dir, &self.version, self.archive);

        let state = if self.gate.is_granted(Permission::RecordAudio) {
            LaunchState::Running(self.bootstrap(build)?)
        } else {
            self.gate.request(&PermissionRequest::assistant());
            LaunchState::AwaitingPermission
        };

        Ok(Startup { provision, state })
    }

    /// Continue after the permission answer arrives
    pub fn on_permission_result<C, F>(&self, result: &PermissionResult, build: F) -> Result<LaunchState<C>>
    where
        C: PlatformClient,
        F: FnOnce(&ClientConfig) -> Result<C>,
    {
        if !allows_session(result) {
            tracing::warn!(code = result.code, "microphone permission denied, assistant disabled");
            return Ok(LaunchState::Denied);
        }
        Ok(LaunchState::Running(self.bootstrap(build)?))
    }

    fn bootstrap<C, F>(&self, build: F) -> Result<SessionHandle<C>>
    where
        C: PlatformClient,
        F: FnOnce(&ClientConfig) -> Result<C>,
    {
        let handle = create_session(&self.bundle_dir, build)?;
        handle.connect(&self.context)?;
        Ok(handle)
    }
}
