//! # Responder Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command handlers of the `responder` binary.
//! Each command defines its own arguments structure (derived with Clap) and a
//! handler that drives an already-constructed `Responder`.
//!
//! ## Commands
//!
//! - `chat`: Interactive session reading lines from stdin (the default)
//! - `ask`: Answer a single question given on the command line
//!

/// One-shot question answered from command-line words.
pub mod ask;
/// Interactive session until the user says `bye` or input ends.
pub mod chat;
