//! Progress display for bundle extraction

use indicatif::{ProgressBar, ProgressStyle};

use crate::provision::{EntryKind, ExtractedEntry};

/// Longest entry path shown next to the spinner
const MAX_PATH_LEN: usize = 50;

/// Spinner showing the entry currently being extracted
pub struct ProgressDisplay {
    entry_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Visible spinner on stderr
    pub fn spinner() -> Self {
        let entry_pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {pos} entries {msg}") {
            entry_pb.set_style(style);
        }
        Self { entry_pb }
    }

    /// Hidden display, for `--quiet` and non-terminal output
    pub fn hidden() -> Self {
        Self {
            entry_pb: ProgressBar::hidden(),
        }
    }

    /// Record an extracted entry
    pub fn update_entry(&self, entry: &ExtractedEntry<'_>) {
        let path = entry.relative.to_string_lossy();
        let display_path = truncate_path(&path);
        let msg = match entry.kind {
            EntryKind::Directory => format!("{display_path}/"),
            EntryKind::File => display_path,
        };
        self.entry_pb.set_message(msg);
        self.entry_pb.inc(1);
    }

    pub fn finish(&self) {
        self.entry_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.entry_pb.abandon();
    }
}

fn truncate_path(path: &str) -> String {
    let count = path.chars().count();
    if count > MAX_PATH_LEN {
        let tail: String = path.chars().skip(count - (MAX_PATH_LEN - 3)).collect();
        format!("...{tail}")
    } else {
        path.to_string()
    }
}
