//! Command implementations for the voice-assets CLI

pub mod clean;
pub mod completions;
pub mod provision;
pub mod run;
pub mod status;
pub mod version;
