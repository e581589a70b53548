//! # Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! Answers one question given as command-line words and exits.
//!
//! ```bash
//! responder ask my printer is slow
//! ```
//!
use crate::common::input::tokenize;
use crate::core::error::Result;
use crate::responder::Responder;
use clap::Parser;
use rand::Rng;
use std::io::Write;
use tracing::debug;

/// Arguments for `responder ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question, as one or more words.
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Prints the response to the words in `args`.
pub fn handle_ask<R: Rng, W: Write>(
    responder: &mut Responder<R>,
    args: AskArgs,
    mut output: W,
) -> Result<()> {
    let words = tokenize(&args.words.join(" "));
    debug!("Asking with words: {:?}", words);
    writeln!(output, "{}", responder.generate_response(&words))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{DefaultResponses, ResponseTable, FALLBACK_RESPONSE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use std::path::Path;

    #[test]
    fn test_handle_ask_matches_case_insensitively() -> Result<()> {
        let table = ResponseTable::from_reader(
            Cursor::new("crash\nPlease send us the log.\n"),
            Path::new("responses.txt"),
        )?;
        let mut responder =
            Responder::from_parts(table, DefaultResponses::default(), StdRng::seed_from_u64(3));

        let mut out = Vec::new();
        let args = AskArgs {
            words: vec!["It".into(), "CRASH".into(), "again".into()],
        };
        handle_ask(&mut responder, args, &mut out)?;
        assert_eq!(String::from_utf8(out)?, "Please send us the log.\n");

        let mut out = Vec::new();
        let args = AskArgs {
            words: vec!["hmm".into()],
        };
        handle_ask(&mut responder, args, &mut out)?;
        assert_eq!(String::from_utf8(out)?, format!("{}\n", FALLBACK_RESPONSE));
        Ok(())
    }
}
