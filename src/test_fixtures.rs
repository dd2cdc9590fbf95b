//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{ZipEntry, build_zip, create_temp_dir};
//!
//! let temp = create_temp_dir();
//! let zip = build_zip(&[ZipEntry::dir("a/"), ZipEntry::file("a/b.txt", b"hello")]);
//! ```

#![allow(clippy::expect_used)]

use std::io::{Cursor, Write};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// One entry of an in-memory test archive
pub struct ZipEntry<'a> {
    pub name: &'a str,
    /// `None` for directory entries
    pub content: Option<&'a [u8]>,
}

impl<'a> ZipEntry<'a> {
    pub fn dir(name: &'a str) -> Self {
        Self {
            name,
            content: None,
        }
    }

    pub fn file(name: &'a str, content: &'a [u8]) -> Self {
        Self {
            name,
            content: Some(content),
        }
    }
}

/// Build a zip archive in memory, entries written in the given order.
///
/// # Panics
///
/// Panics if the zip writer fails.
#[must_use]
pub fn build_zip(entries: &[ZipEntry<'_>]) -> Vec<u8> {
    build_zip_with(entries, SimpleFileOptions::default())
}

/// [`build_zip`] with explicit entry options, e.g. a compression method
#[must_use]
pub fn build_zip_with(entries: &[ZipEntry<'_>], options: SimpleFileOptions) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries {
        match entry.content {
            None => writer
                .add_directory(entry.name, options)
                .expect("Failed to add directory entry"),
            Some(content) => {
                writer
                    .start_file(entry.name, options)
                    .expect("Failed to start file entry");
                writer.write_all(content).expect("Failed to write entry");
            }
        }
    }

    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
const DATA_DESCRIPTOR_SIG: u32 = 0x0807_4b50;
const CENTRAL_HEADER_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;
const FLAG_DATA_DESCRIPTOR: u16 = 0x0008;
const VERSION_20: u16 = 20;
/// 1980-01-01 in MS-DOS date format
const DOS_DATE: u16 = (1 << 5) | 1;

/// Build an archive the way writers on unseekable output do: stored entries
/// whose local headers leave CRC and sizes zeroed (flag bit 3), each followed
/// by a data descriptor. Only the central directory carries the real sizes.
///
/// # Panics
///
/// Panics if an entry does not fit the 32-bit format.
#[must_use]
pub fn build_descriptor_zip(entries: &[ZipEntry<'_>]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for entry in entries {
        let content = entry.content.unwrap_or_default();
        let crc = crc32fast::hash(content);
        let size = u32::try_from(content.len()).expect("entry too large");
        let name_len = u16::try_from(entry.name.len()).expect("entry name too long");
        let offset = u32::try_from(out.len()).expect("archive too large");

        put_u32(&mut out, LOCAL_HEADER_SIG);
        put_u16(&mut out, VERSION_20);
        put_u16(&mut out, FLAG_DATA_DESCRIPTOR);
        put_u16(&mut out, 0); // stored
        put_u16(&mut out, 0);
        put_u16(&mut out, DOS_DATE);
        put_u32(&mut out, 0);
        put_u32(&mut out, 0);
        put_u32(&mut out, 0);
        put_u16(&mut out, name_len);
        put_u16(&mut out, 0);
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(content);
        put_u32(&mut out, DATA_DESCRIPTOR_SIG);
        put_u32(&mut out, crc);
        put_u32(&mut out, size);
        put_u32(&mut out, size);

        put_u32(&mut central, CENTRAL_HEADER_SIG);
        put_u16(&mut central, VERSION_20);
        put_u16(&mut central, VERSION_20);
        put_u16(&mut central, FLAG_DATA_DESCRIPTOR);
        put_u16(&mut central, 0);
        put_u16(&mut central, 0);
        put_u16(&mut central, DOS_DATE);
        put_u32(&mut central, crc);
        put_u32(&mut central, size);
        put_u32(&mut central, size);
        put_u16(&mut central, name_len);
        // extra, comment, disk, internal and external attributes
        put_u16(&mut central, 0);
        put_u16(&mut central, 0);
        put_u16(&mut central, 0);
        put_u16(&mut central, 0);
        put_u32(&mut central, 0);
        put_u32(&mut central, offset);
        central.extend_from_slice(entry.name.as_bytes());
    }

    let count = u16::try_from(entries.len()).expect("too many entries");
    let central_offset = u32::try_from(out.len()).expect("archive too large");
    let central_size = u32::try_from(central.len()).expect("central directory too large");
    out.extend_from_slice(&central);

    put_u32(&mut out, END_OF_CENTRAL_DIR_SIG);
    put_u16(&mut out, 0);
    put_u16(&mut out, 0);
    put_u16(&mut out, count);
    put_u16(&mut out, count);
    put_u32(&mut out, central_size);
    put_u32(&mut out, central_offset);
    put_u16(&mut out, 0);
    out
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}
