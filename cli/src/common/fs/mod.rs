//! # Responder Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers for the response sources. Everything currently lives in
//! the `io` submodule:
//!
//! - **`io`**: Opening a source (`open_source`) and walking its ASCII lines
//!   (`for_each_ascii_line`, `for_each_line_in_file`).
//!
//! Callers import the submodule directly, e.g. `use crate::common::fs::io;`.
//!

/// Line-oriented reading of ASCII text sources.
pub mod io;
