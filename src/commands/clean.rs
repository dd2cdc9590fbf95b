//! Clean command implementation

use crate::config::Settings;
use crate::error::Result;
use crate::provision::remove_bundle;

/// Run clean command
pub fn run(settings: &Settings) -> Result<()> {
    let bundle_dir = settings.bundle_dir();
    if remove_bundle(&bundle_dir)? {
        println!("Removed bundle at {}", bundle_dir.display());
    } else {
        println!("Nothing to remove at {}", bundle_dir.display());
    }
    Ok(())
}
