//! Status command implementation

use console::Style;

use crate::cli::StatusArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::provision::{BundleStatus, inspect};

/// Run status command
pub fn run(settings: &Settings, args: &StatusArgs) -> Result<()> {
    let status = inspect(&settings.bundle_dir(), &settings.version)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print!("{}", render(&status));
    }

    Ok(())
}

fn render(status: &BundleStatus) -> String {
    let label = Style::new().bold();
    let state = if status.provisioned {
        Style::new().green().apply_to("provisioned")
    } else {
        Style::new().yellow().apply_to("not provisioned")
    };

    let markers = if status.markers.is_empty() {
        "none".to_string()
    } else {
        status.markers.join(", ")
    };

    format!(
        "{}\n  Location: {}\n  Version: {} ({})\n  Markers: {}\n  Files: {}\n  Size: {}\n",
        label.apply_to("Bundle Status:"),
        status.bundle_dir.display(),
        status.version,
        state,
        markers,
        status.files,
        status.formatted_size()
    )
}
