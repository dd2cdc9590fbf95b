//! voice-assets - voice assistant bundle provisioning
//!
//! Command line front end for provisioning assistant bundles and running
//! scripted platform sessions.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use voice_assets::cli::{Cli, Commands};
use voice_assets::commands;
use voice_assets::config::Settings;
use voice_assets::error::Result;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Completions(ref args) => commands::completions::run(args),
        ref command => {
            let settings = Settings::resolve(&cli.overrides())?;
            tracing::debug!(?settings, "resolved settings");
            match command {
                Commands::Provision(args) => commands::provision::run(&settings, args),
                Commands::Status(args) => commands::status::run(&settings, args),
                Commands::Clean => commands::clean::run(&settings),
                Commands::Run(args) => commands::run::run(&settings, args),
                Commands::Version | Commands::Completions(_) => Ok(()),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
