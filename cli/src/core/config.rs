//! # Responder Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module locates the two response sources (the keyed response table and
//! the default responses) and the fallback response text. Settings come from
//! several places and are merged before use.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--responses`, `--defaults`)
//! 2. Project-specific `.responder.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/responder/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [sources]
//! responses = "~/support/responses.txt"
//! defaults = "~/support/default.txt"
//! fallback_response = "Could you elaborate on that?"
//! ```
//!
//! A missing source file is not a configuration error. The Responder recovers
//! from it at load time; validation only warns about it here.
//!
use crate::core::error::{ResponderError, Result};
use crate::responder::defaults::FALLBACK_RESPONSE;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Where the response sources live and what to say when nothing else fits.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Keyed response table (can use ~). Will be expanded.
    #[serde(default = "default_responses_path")]
    pub responses: String,
    /// Default responses, one paragraph each (can use ~). Will be expanded.
    #[serde(default = "default_defaults_path")]
    pub defaults: String,
    /// Used when the default responses source yields nothing.
    #[serde(default = "default_fallback_response")]
    pub fallback_response: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            responses: default_responses_path(),
            defaults: default_defaults_path(),
            fallback_response: default_fallback_response(),
        }
    }
}

impl SourcesConfig {
    /// Sources rooted in `dir`, using the default file names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            responses: dir.join(default_responses_path()).to_string_lossy().into_owned(),
            defaults: dir.join(default_defaults_path()).to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    pub fn responses_path(&self) -> &Path {
        Path::new(&self.responses)
    }

    pub fn defaults_path(&self) -> &Path {
        Path::new(&self.defaults)
    }
}

/// Values given on the command line, which win over any file.
#[derive(Debug, Default, Clone)]
pub struct SourceOverrides {
    pub responses: Option<PathBuf>,
    pub defaults: Option<PathBuf>,
}

fn default_responses_path() -> String {
    "responses.txt".to_string()
}
fn default_defaults_path() -> String {
    "default.txt".to_string()
}
fn default_fallback_response() -> String {
    FALLBACK_RESPONSE.to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".responder.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config(overrides: &SourceOverrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "responder") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.responder.toml`.
/// The search stops at the first directory holding a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.sources.responses = if project_cfg.sources.responses != default_responses_path() {
        project_cfg.sources.responses
    } else {
        user.sources.responses
    };
    merged.sources.defaults = if project_cfg.sources.defaults != default_defaults_path() {
        project_cfg.sources.defaults
    } else {
        user.sources.defaults
    };
    merged.sources.fallback_response =
        if project_cfg.sources.fallback_response != default_fallback_response() {
            project_cfg.sources.fallback_response
        } else {
            user.sources.fallback_response
        };
    merged
}

fn apply_overrides(config: &mut Config, overrides: &SourceOverrides) {
    if let Some(responses) = &overrides.responses {
        config.sources.responses = responses.to_string_lossy().into_owned();
    }
    if let Some(defaults) = &overrides.defaults {
        config.sources.defaults = defaults.to_string_lossy().into_owned();
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.sources.responses = shellexpand::tilde(&config.sources.responses).into_owned();
    config.sources.defaults = shellexpand::tilde(&config.sources.defaults).into_owned();
    debug!(
        "Expanded source paths: responses={}, defaults={}",
        config.sources.responses, config.sources.defaults
    );
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    let sources = &config.sources;
    for (name, value) in [("responses", &sources.responses), ("defaults", &sources.defaults)] {
        if value.trim().is_empty() {
            return Err(anyhow!(ResponderError::Config(format!(
                "The '{}' source path cannot be empty.",
                name
            ))));
        }
        let path = Path::new(value);
        if !path.exists() {
            warn!("Configured {} source '{}' does not exist.", name, path.display());
        } else if path.is_dir() {
            // Reading it fails later and the loaders fall back.
            warn!("Configured {} source '{}' is a directory, not a file.", name, path.display());
        }
    }
    if sources.fallback_response.trim().is_empty() {
        return Err(anyhow!(ResponderError::Config(
            "The fallback response cannot be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
