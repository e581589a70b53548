//! # Responder
//!
//! File: cli/src/lib.rs
//!
//! A keyword-triggered response generator. Input is a set of words; if any of
//! them is a key in the response table, its stored response is returned,
//! otherwise a default response is picked at random.
//!
//! The library exposes the modules so the `responder` binary and the
//! integration tests share one implementation:
//! - `core`: configuration and error types
//! - `common`: source file reading and input tokenizing
//! - `responder`: the response table, default responses and the `Responder`
//! - `commands`: the `chat` and `ask` command handlers
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod responder;
