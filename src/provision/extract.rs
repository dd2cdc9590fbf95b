//! Zip extraction
//!
//! Entries are located through the central directory and written in archive
//! order. Sizes and checksums come from the central directory, so entries that
//! carry a trailing data descriptor (general purpose flag bit 3) extract like
//! any other.

use std::fs::{self, File};
use std::io::{BufReader, Read, Seek, Write};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{
    Result, archive_entry_failed, archive_path_traversal, create_dir_failed, file_write_failed,
};

/// Size of the buffer used to copy entry bytes to disk
const COPY_BUFFER_SIZE: usize = 8192;

/// Counts of what an extraction wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ProvisionReport {
    /// Regular files written
    pub files: usize,
    /// Directory entries materialized
    pub directories: usize,
    /// Total bytes written to files
    pub bytes: u64,
}

/// Kind of an archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// An entry that has just been written to disk
#[derive(Debug)]
pub struct ExtractedEntry<'a> {
    /// Path relative to the extraction target
    pub relative: &'a Path,
    pub kind: EntryKind,
    /// Bytes written (always 0 for directories)
    pub bytes: u64,
}

/// Extract every entry of a zip archive into `target`
///
/// Parent directories are created before file bytes are written. Directory
/// entries only create directories. Every entry must resolve to a path inside
/// `target`; the first one that does not aborts the extraction.
///
/// `observer` is invoked once per entry after it has been written.
pub fn unzip<R: Read + Seek>(
    reader: R,
    target: &Path,
    observer: &mut dyn FnMut(&ExtractedEntry<'_>),
) -> Result<ProvisionReport> {
    let mut archive = ZipArchive::new(BufReader::new(reader))?;
    let mut report = ProvisionReport::default();
    let mut buffer = [0u8; COPY_BUFFER_SIZE];

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative: PathBuf = entry
            .enclosed_name()
            .ok_or_else(|| archive_path_traversal(entry.name()))?;
        let path = target.join(&relative);

        if entry.is_dir() {
            ensure_dir(&path)?;
            report.directories += 1;
            observer(&ExtractedEntry {
                relative: &relative,
                kind: EntryKind::Directory,
                bytes: 0,
            });
            continue;
        }

        ensure_dir(path.parent().unwrap_or(target))?;
        let written = write_entry(&mut entry, &path, &mut buffer)?;

        tracing::trace!(path = %relative.display(), bytes = written, "extracted file");
        report.files += 1;
        report.bytes += written;
        observer(&ExtractedEntry {
            relative: &relative,
            kind: EntryKind::File,
            bytes: written,
        });
    }

    Ok(report)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| create_dir_failed(dir, e))
}

/// Copy one entry's bytes to `path`, overwriting whatever is there
fn write_entry(entry: &mut impl Read, path: &Path, buffer: &mut [u8]) -> Result<u64> {
    let mut out = File::create(path).map_err(|e| file_write_failed(path, e))?;
    let mut written = 0u64;

    loop {
        let count = entry
            .read(buffer)
            .map_err(|e| archive_entry_failed(format!("{}: {}", path.display(), e)))?;

        if count == 0 {
            break;
        }

        out.write_all(&buffer[..count])
            .map_err(|e| file_write_failed(path, e))?;
        written += count as u64;
    }

    out.flush().map_err(|e| file_write_failed(path, e))?;
    Ok(written)
}
