//! # Responder Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in `tests/`
//! is compiled as its own crate and pulls these in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Text of the fallback response used when no default response is available.
pub const FALLBACK: &str = "Could you elaborate on that?";

/// # Get Responder Command (`responder_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `responder` binary with
/// the source environment variables cleared and the home and config
/// directories pointed at an empty scratch directory, so no user config file
/// is picked up.
///
/// ## Panics
/// Panics if the `responder` binary cannot be found via `Command::cargo_bin`.
pub fn responder_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("responder").expect("Failed to find responder binary for testing");
    let home = Path::new(env!("CARGO_TARGET_TMPDIR")).join("responder-home");
    cmd.env_remove("RESPONDER_RESPONSES")
        .env_remove("RESPONDER_DEFAULTS")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", &home);
    cmd
}

/// Directory holding the sample sources shipped with the crate.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Writes `responses` and `defaults` (if given) into a fresh temporary directory
/// as `responses.txt` and `default.txt`.
pub fn write_sources(responses: Option<&str>, defaults: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for sources");
    if let Some(text) = responses {
        fs::write(dir.path().join("responses.txt"), text).expect("Failed to write responses");
    }
    if let Some(text) = defaults {
        fs::write(dir.path().join("default.txt"), text).expect("Failed to write defaults");
    }
    dir
}
