//! Provision command implementation

use console::Style;

use crate::cli::ProvisionArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::provision::{ExtractedEntry, FileArchive, try_provision_with};

/// Run provision command
///
/// Unlike application startup, the command surfaces extraction errors.
pub fn run(settings: &Settings, args: &ProvisionArgs) -> Result<()> {
    let bundle_dir = settings.bundle_dir();
    let archive = FileArchive::new(&settings.archive);
    let progress = if args.quiet {
        ProgressDisplay::hidden()
    } else {
        ProgressDisplay::spinner()
    };

    let result = try_provision_with(
        &bundle_dir,
        &settings.version,
        &archive,
        &mut |entry: &ExtractedEntry<'_>| progress.update_entry(entry),
    );

    let report = match result {
        Ok(report) => {
            progress.finish();
            report
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    let green = Style::new().green().bold();
    match report {
        None => println!(
            "Version {} already provisioned in {}",
            green.apply_to(&settings.version),
            bundle_dir.display()
        ),
        Some(report) => println!(
            "Provisioned version {} in {} ({} files, {} directories, {} bytes)",
            green.apply_to(&settings.version),
            bundle_dir.display(),
            report.files,
            report.directories,
            report.bytes
        ),
    }

    Ok(())
}
