//! # Responder Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `responder` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the `Responder`
//! - Routing execution to the selected command handler
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session with sources in the current directory
//! responder
//!
//! # One-shot question with explicit sources and debug logging
//! responder -vv --responses data/responses.txt --defaults data/default.txt ask why is it slow
//! ```
//!
use clap::{Parser, Subcommand};
use responder::commands;
use responder::core::config::{self, SourceOverrides};
use responder::responder::Responder;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "responder",
    about = "Keyword-triggered response generator",
    long_about = "Answers input words from a keyed response table, falling back to\n\
                  a random default response when no word is recognised.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Keyed response table (overrides configuration).
    #[arg(long, env = "RESPONDER_RESPONSES", global = true)]
    responses: Option<PathBuf>,
    /// Default responses file (overrides configuration).
    #[arg(long, env = "RESPONDER_DEFAULTS", global = true)]
    defaults: Option<PathBuf>,
    /// Seed for default response picks, for reproducible sessions.
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive session (default)
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single question
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let overrides = SourceOverrides {
        responses: cli.responses,
        defaults: cli.defaults,
    };
    let cfg = match config::load_config(&overrides) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    let mut bot = match cli.seed {
        Some(seed) => Responder::with_seed(&cfg.sources, seed),
        None => Responder::new(&cfg.sources),
    };

    let command_result = match cli.command.unwrap_or(Commands::Chat(Default::default())) {
        Commands::Chat(args) => commands::chat::handle_chat(&mut bot, args),
        Commands::Ask(args) => commands::ask::handle_ask(&mut bot, args, std::io::stdout()),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
