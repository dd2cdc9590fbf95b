//! Common test utilities for voice-assets integration tests

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A temporary working directory holding an archive and a data directory
pub struct TestWorkspace {
    pub temp: TempDir,
    /// Working directory of spawned commands
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Data directory passed to the binary
    pub fn data_dir(&self) -> PathBuf {
        self.path.join("data")
    }

    /// Bundle root inside the data directory
    pub fn bundle_dir(&self) -> PathBuf {
        self.data_dir().join("snips")
    }

    /// Write `assistant.zip` in the workspace from (name, content) pairs;
    /// names ending in `/` become directory entries
    pub fn write_archive(&self, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.path.join("assistant.zip");
        std::fs::write(&path, build_zip(entries)).expect("Failed to write archive");
        path
    }

    /// Write `assistant.zip` with data descriptors and stored entries, the
    /// layout produced by writers on unseekable output
    pub fn write_descriptor_archive(&self, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.path.join("assistant.zip");
        std::fs::write(&path, build_descriptor_zip(entries)).expect("Failed to write archive");
        path
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the bundle
    pub fn read_bundle_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.bundle_dir().join(path)).expect("Failed to read bundle file")
    }

    pub fn bundle_path_exists(&self, path: &str) -> bool {
        self.bundle_dir().join(path).exists()
    }

    /// Command running in this workspace with the data directory pinned
    pub fn cmd(&self) -> Command {
        voice_assets_cmd(&self.path, &self.data_dir())
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the binary command, ignoring any developer `VOICE_ASSETS_*` overrides
pub fn voice_assets_cmd(workdir: &Path, data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("voice-assets").unwrap();
    cmd.current_dir(workdir);
    cmd.env_remove("VOICE_ASSETS_VERSION");
    cmd.env_remove("VOICE_ASSETS_ARCHIVE");
    cmd.env_remove("RUST_LOG");
    cmd.env("VOICE_ASSETS_DATA_DIR", data_dir);
    cmd
}

/// Build a zip archive in memory
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Stored entries with zeroed local sizes (flag bit 3) and trailing data descriptors
pub fn build_descriptor_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    const FLAGS: u16 = 0x0008;
    const DOS_DATE: u16 = (1 << 5) | 1;

    let mut out = Vec::new();
    let mut central = Vec::new();

    for (name, content) in entries {
        let crc = crc32fast::hash(content.as_bytes());
        let size = u32::try_from(content.len()).unwrap();
        let name_len = u16::try_from(name.len()).unwrap();
        let offset = u32::try_from(out.len()).unwrap();

        put_u32(&mut out, 0x0403_4b50);
        for field in [20, FLAGS, 0, 0, DOS_DATE] {
            put_u16(&mut out, field);
        }
        for _ in 0..3 {
            put_u32(&mut out, 0);
        }
        put_u16(&mut out, name_len);
        put_u16(&mut out, 0);
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(content.as_bytes());
        for field in [0x0807_4b50, crc, size, size] {
            put_u32(&mut out, field);
        }

        put_u32(&mut central, 0x0201_4b50);
        for field in [20, 20, FLAGS, 0, 0, DOS_DATE] {
            put_u16(&mut central, field);
        }
        for field in [crc, size, size] {
            put_u32(&mut central, field);
        }
        for field in [name_len, 0, 0, 0, 0] {
            put_u16(&mut central, field);
        }
        put_u32(&mut central, 0);
        put_u32(&mut central, offset);
        central.extend_from_slice(name.as_bytes());
    }

    let count = u16::try_from(entries.len()).unwrap();
    let central_offset = u32::try_from(out.len()).unwrap();
    let central_size = u32::try_from(central.len()).unwrap();
    out.extend_from_slice(&central);

    put_u32(&mut out, 0x0605_4b50);
    for field in [0, 0, count, count] {
        put_u16(&mut out, field);
    }
    put_u32(&mut out, central_size);
    put_u32(&mut out, central_offset);
    put_u16(&mut out, 0);
    out
}
