//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use snapdiff::snapshot::{write_snapshot, Snapshot};
use tempfile::TempDir;

pub const WHITE: u32 = 0xffffff;
pub const BLACK: u32 = 0x000000;

/// White-on-black snapshot built from text lines.
pub fn grid(lines: &[&str]) -> Snapshot {
    Snapshot::from_lines(lines, WHITE, BLACK).expect("valid grid")
}

/// Write a snapshot into `dir` and return its path.
pub fn write_fixture(dir: &Path, name: &str, snapshot: &Snapshot) -> PathBuf {
    let path = dir.join(name);
    write_snapshot(&path, snapshot).expect("Failed to write fixture");
    path
}

/// Write raw bytes into `dir` and return the path.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// Temp dir holding `front.bin` and `back.bin`.
pub fn fixture_pair(front: &Snapshot, back: &Snapshot) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let front_path = write_fixture(dir.path(), "front.bin", front);
    let back_path = write_fixture(dir.path(), "back.bin", back);
    (dir, front_path, back_path)
}

/// Snapshot file header with arbitrary field values.
pub fn header(magic: u32, rows: i32, cols: i32, area: i32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16);
    bytes.extend_from_slice(&magic.to_le_bytes());
    bytes.extend_from_slice(&rows.to_le_bytes());
    bytes.extend_from_slice(&cols.to_le_bytes());
    bytes.extend_from_slice(&area.to_le_bytes());
    bytes
}

/// Run snapdiff without pausing, isolated from any user config.
pub fn run_snapdiff(args: &[&str]) -> (String, String, i32) {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_snapdiff"))
        .arg("--no-pause")
        .args(args)
        .env("SNAPDIFF_CONFIG", config_dir.path().join("missing.toml"))
        .output()
        .expect("Failed to execute snapdiff");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Printed text and SGR parameter lists recovered from terminal output.
#[derive(Debug, Default)]
pub struct AnsiCapture {
    pub text: String,
    pub sgr: Vec<Vec<u16>>,
}

impl vte::Perform for AnsiCapture {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        if byte == b'\n' || byte == b'\t' {
            self.text.push(char::from(byte));
        }
    }

    fn csi_dispatch(&mut self, params: &vte::Params, _intermediates: &[u8], _ignore: bool, c: char) {
        if c == 'm' {
            self.sgr
                .push(params.iter().flat_map(|p| p.iter().copied()).collect());
        }
    }
}

/// Parse terminal output with a VT parser.
pub fn parse_ansi(output: &str) -> AnsiCapture {
    let mut capture = AnsiCapture::default();
    let mut parser: vte::Parser = vte::Parser::new();
    parser.advance(&mut capture, output.as_bytes());
    capture
}
