//! # Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Runs an interactive session: greet the user, then answer each input line
//! until a line containing the word `bye` is entered or input ends.
//!
//! ```bash
//! responder chat
//! # or simply
//! responder
//! ```
//!
use crate::common::input::tokenize;
use crate::core::error::Result;
use crate::responder::Responder;
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Word that ends a session.
const FAREWELL_WORD: &str = "bye";

const WELCOME: &str = "Welcome to the technical support system.\n\
                       Please tell us about your problem.\n\
                       Type 'bye' to leave.";
const GOODBYE: &str = "Nice talking to you. Bye...";
const PROMPT: &str = "> ";

/// Arguments for `responder chat`.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Do not print the welcome and goodbye messages.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Runs a session on stdin/stdout.
pub fn handle_chat<R: Rng>(responder: &mut Responder<R>, args: ChatArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(responder, &args, stdin.lock(), stdout.lock())
}

/// Runs a session reading from `input` and writing to `output`.
pub fn run_session<R, I, W>(
    responder: &mut Responder<R>,
    args: &ChatArgs,
    mut input: I,
    mut output: W,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    if !args.quiet {
        writeln!(output, "{}", WELCOME)?;
    }

    let mut exchanges = 0usize;
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush().context("Failed to flush output")?;

        line.clear();
        if input
            .read_line(&mut line)
            .context("Failed to read input line")?
            == 0
        {
            debug!("Input ended, closing session");
            break;
        }

        let words = tokenize(&line);
        if words.contains(FAREWELL_WORD) {
            break;
        }
        writeln!(output, "{}", responder.generate_response(&words))?;
        exchanges += 1;
    }

    if !args.quiet {
        writeln!(output, "{}", GOODBYE)?;
    }
    info!("Session ended after {} exchanges", exchanges);
    Ok(())
}
