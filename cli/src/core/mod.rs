//! # Responder Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the rest of the crate:
//! - `config`: Locating the response sources (TOML files, CLI overrides, defaults)
//! - `error`: The source error taxonomy and the application `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use responder::core::config::{self, SourceOverrides};
//! use responder::core::error::{ResponderError, Result};
//! ```
//!
pub mod config;
pub mod error;
