//! # Responder Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the responder core and the command handlers:
//!
//! - **`fs`**: Line-oriented ASCII reading of the response source files.
//! - **`input`**: Tokenizing a line of user input into a set of words.
//!

/// Filesystem utilities for reading response sources.
pub mod fs;
/// Tokenizer turning raw user input into a word set.
pub mod input;
