//! Runtime permission gating
//!
//! The assistant needs the microphone before a session may be created.
//! Granting is asynchronous: a request is issued and the answer arrives later
//! as a [`PermissionResult`] carrying the same request code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request code used for the assistant permission request
pub const REQUEST_CODE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    RecordAudio,
    ReadExternalStorage,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::RecordAudio => write!(f, "record-audio"),
            Permission::ReadExternalStorage => write!(f, "read-external-storage"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grant {
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRequest {
    pub code: i32,
    pub permissions: Vec<Permission>,
}

impl PermissionRequest {
    /// Microphone first, then storage read
    pub fn assistant() -> Self {
        Self {
            code: REQUEST_CODE,
            permissions: vec![Permission::RecordAudio, Permission::ReadExternalStorage],
        }
    }
}

/// Answer to a [`PermissionRequest`], grants in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionResult {
    pub code: i32,
    pub permissions: Vec<Permission>,
    pub grants: Vec<Grant>,
}

impl PermissionResult {
    /// Answer every permission of `request` with `grant`
    pub fn uniform(request: &PermissionRequest, grant: Grant) -> Self {
        Self {
            code: request.code,
            permissions: request.permissions.clone(),
            grants: vec![grant; request.permissions.len()],
        }
    }
}

/// Whether `result` lets the session start
///
/// Only the first grant of the assistant request is consulted, which is the
/// microphone.
pub fn allows_session(result: &PermissionResult) -> bool {
    result.code == REQUEST_CODE && result.grants.first() == Some(&Grant::Granted)
}

/// Platform permission service
pub trait PermissionGate {
    fn is_granted(&self, permission: Permission) -> bool;

    /// Ask the user; the answer is delivered separately
    fn request(&self, request: &PermissionRequest);
}

/// Gate with a fixed answer, for the CLI and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGate {
    /// Permissions already granted before any request
    pub preauthorized: bool,
}

impl PermissionGate for FixedGate {
    fn is_granted(&self, permission: Permission) -> bool {
        tracing::debug!(%permission, granted = self.preauthorized, "permission check");
        self.preauthorized
    }

    fn request(&self, request: &PermissionRequest) {
        tracing::info!(
            code = request.code,
            permissions = ?request.permissions,
            "requesting permissions"
        );
    }
}
