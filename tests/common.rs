#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn rtl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimeledger");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Fresh temp home plus a ledger path inside it (not created yet).
pub fn setup_ledger(name: &str) -> (TempDir, String) {
    let home = tempfile::Builder::new()
        .prefix(&format!("rtl_{name}_"))
        .tempdir()
        .expect("create temp home");
    let ledger: PathBuf = home.path().join(format!("{name}_timelog.csv"));
    (home, ledger.to_string_lossy().to_string())
}

/// Initialize the ledger file in test mode (no config written).
pub fn init_ledger(home: &Path, ledger: &str) {
    rtl(home)
        .args(["--ledger", ledger, "--test", "init"])
        .assert()
        .success();
}

/// Raw ledger lines.
pub fn ledger_lines(ledger: &str) -> Vec<String> {
    fs::read_to_string(ledger)
        .expect("read ledger")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Field `idx` of a `;`-separated record.
pub fn field(line: &str, idx: usize) -> String {
    line.split(';').nth(idx).unwrap_or_default().to_string()
}
