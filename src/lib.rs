//! voice-assets - voice assistant bundle provisioning
//!
//! Extracts a versioned assistant bundle from a zip archive exactly once per
//! version, gates the assistant on microphone permission, and bootstraps a
//! session against an external voice platform client whose events are
//! forwarded into logging.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod launcher;
pub mod permission;
pub mod platform;
pub mod progress;
pub mod provision;

#[cfg(test)]
mod test_fixtures;

pub use error::{Result, VoiceAssetsError};
