#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rav() -> Command {
    cargo_bin_cmd!("rattendview")
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendview.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path of a configuration file that does not exist (defaults apply)
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_conf"), "conf")
}

/// Write a CSV sheet (one string per line) and return its path
pub fn write_sheet(name: &str, lines: &[&str]) -> String {
    let path = temp_path(name, "csv");
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(&path, content).expect("write sheet");
    path
}

/// Run `report` against a CSV sheet with default configuration
pub fn report(name: &str, sheet: &str, extra: &[&str]) -> assert_cmd::assert::Assert {
    let cfg = no_config(name);
    let mut args = vec!["--config", cfg.as_str(), "--source-file", sheet, "report"];
    args.extend_from_slice(extra);
    rav().args(&args).assert()
}

/// Owned cells from string slices, for library-level tests
pub fn cells(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
