//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Overrides;

/// voice-assets - voice assistant bundle provisioning
///
/// Extract a versioned assistant bundle once per version and bootstrap a voice platform
/// session on top of it.
#[derive(Parser, Debug)]
#[command(
    name = "voice-assets",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Provision voice assistant bundles and bootstrap platform sessions",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  voice-assets provision --archive assistant.zip\n    \
                  voice-assets status --json\n    \
                  voice-assets run --events conversation.yaml\n    \
                  voice-assets clean"
)]
pub struct Cli {
    /// Configuration file (defaults to ./voice-assets.yaml when present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Application data directory; the bundle is kept in <DATA_DIR>/snips
    #[arg(long, global = true, env = "VOICE_ASSETS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Bundle version; a new version forces re-extraction
    #[arg(long, global = true, env = "VOICE_ASSETS_VERSION")]
    pub bundle_version: Option<String>,

    /// Zip archive holding the assistant bundle
    #[arg(long, short = 'a', global = true, env = "VOICE_ASSETS_ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings overrides taken from global flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            data_dir: self.data_dir.clone(),
            version: self.bundle_version.clone(),
            archive: self.archive.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the bundle unless this version is already provisioned
    Provision(ProvisionArgs),

    /// Show the state of the provisioned bundle
    Status(StatusArgs),

    /// Remove the provisioned bundle and all version markers
    Clean,

    /// Provision, then run a session against a scripted platform
    Run(RunArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the provision command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Provision the default archive:\n    voice-assets provision\n\n\
                  Provision a specific build:\n    voice-assets provision --archive build/assistant.zip --bundle-version 1.3.0")]
pub struct ProvisionArgs {
    /// Do not show extraction progress
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Print status as JSON
    #[arg(long)]
    pub json: bool,
}

/// How the permission prompt is answered during `run`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PermissionMode {
    /// Microphone already granted, no prompt
    #[default]
    Granted,
    /// Prompt, and the user grants
    Prompt,
    /// Prompt, and the user denies
    Deny,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Replay a conversation:\n    voice-assets run --events conversation.yaml\n\n\
                  Simulate a denied microphone:\n    voice-assets run --permission deny")]
pub struct RunArgs {
    /// YAML list of platform events to replay after `ready`
    #[arg(long, short = 'e')]
    pub events: Option<PathBuf>,

    /// Microphone permission behaviour
    #[arg(long, value_enum, default_value_t = PermissionMode::Granted)]
    pub permission: PermissionMode,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    voice-assets completions --shell bash > ~/.bash_completion.d/voice-assets\n\n\
                  Generate zsh completions:\n    voice-assets completions --shell zsh > ~/.zfunc/_voice-assets")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
