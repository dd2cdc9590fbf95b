//! Archive sources
//!
//! An archive is opened lazily: the provisioner only asks for a stream once it
//! has decided that extraction is needed. Streams must be seekable so entry
//! sizes can be taken from the central directory, which is the only place
//! they are recorded when an entry was written with a data descriptor.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek};
use std::path::PathBuf;

/// Seekable byte stream over a zip archive
pub trait ArchiveStream: Read + Seek {}

impl<T: Read + Seek> ArchiveStream for T {}

/// Something that can produce a fresh zip stream on demand
pub trait ArchiveSource {
    /// Open a new stream positioned at the start of the archive
    fn open(&self) -> io::Result<Box<dyn ArchiveStream + '_>>;

    /// Human readable description for logs and errors
    fn describe(&self) -> String;
}

/// Archive stored as a file on disk
#[derive(Debug, Clone)]
pub struct FileArchive {
    path: PathBuf,
}

impl FileArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArchiveSource for FileArchive {
    fn open(&self) -> io::Result<Box<dyn ArchiveStream + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Archive held in memory, e.g. bundled into the binary with `include_bytes!`
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    bytes: Vec<u8>,
}

impl MemoryArchive {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl ArchiveSource for MemoryArchive {
    fn open(&self) -> io::Result<Box<dyn ArchiveStream + '_>> {
        Ok(Box::new(Cursor::new(self.bytes.as_slice())))
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.bytes.len())
    }
}
