//! Run command implementation
//!
//! Walks through the same startup sequence as the application: provision,
//! permission check, session bootstrap. The platform is the in-process
//! loopback client replaying an event script.

use console::Style;

use crate::cli::{PermissionMode, RunArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::launcher::{LaunchState, Launcher};
use crate::permission::{FixedGate, Grant, PermissionRequest, PermissionResult};
use crate::platform::{ClientCall, ClientConfig, LoopbackClient, PlatformEvent};
use crate::provision::{FileArchive, ProvisionOutcome};

/// Run the run command
pub fn run(settings: &Settings, args: &RunArgs) -> Result<()> {
    let script = match &args.events {
        Some(path) => LoopbackClient::load_script(path)?,
        None => Vec::new(),
    };

    let archive = FileArchive::new(&settings.archive);
    let gate = FixedGate {
        preauthorized: args.permission == PermissionMode::Granted,
    };
    let launcher = Launcher::new(settings, &archive, gate);

    let startup = launcher.start(loopback(script.clone()))?;
    print_provision(&startup.provision);

    let state = match startup.state {
        LaunchState::AwaitingPermission => {
            let grant = if args.permission == PermissionMode::Prompt {
                Grant::Granted
            } else {
                Grant::Denied
            };
            let result = PermissionResult::uniform(&PermissionRequest::assistant(), grant);
            launcher.on_permission_result(&result, loopback(script))?
        }
        other => other,
    };

    match state {
        LaunchState::Running(handle) => {
            let handled = handle.pump(handle.client().events());
            handle.client().join();
            print_session(handled, &handle.client().calls());
        }
        LaunchState::Denied | LaunchState::AwaitingPermission => {
            println!("Microphone permission denied; assistant not started");
        }
    }

    Ok(())
}

fn loopback(script: Vec<PlatformEvent>) -> impl FnOnce(&ClientConfig) -> Result<LoopbackClient> {
    move |config| Ok(LoopbackClient::new(config.clone(), script))
}

fn print_provision(outcome: &ProvisionOutcome) {
    match outcome {
        ProvisionOutcome::AlreadyProvisioned => println!("Bundle already provisioned"),
        ProvisionOutcome::Extracted(report) => {
            println!("Bundle extracted ({} files)", report.files);
        }
        ProvisionOutcome::Failed => println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Bundle extraction failed; will retry on next start")
        ),
    }
}

fn print_session(handled: usize, calls: &[ClientCall]) {
    let started = calls
        .iter()
        .filter(|c| matches!(c, ClientCall::StartSession(_)))
        .count();
    let ended = calls
        .iter()
        .filter(|c| matches!(c, ClientCall::EndSession { .. }))
        .count();
    println!("Session ran: {handled} events, {started} sessions started, {ended} sessions ended");
}
