//! # Default Responses
//!
//! File: cli/src/responder/defaults.rs
//!
//! ## Overview
//!
//! Builds the list of fallback responses used when no input word is a known
//! key. The source is a series of paragraphs separated by exactly one blank
//! line; each paragraph becomes one response, its lines trimmed and joined with
//! single spaces. Responses keep the order they appear in the source.
//!
//! Two or more consecutive blank lines are a format violation. The parser
//! reports it as `ResponderError::MalformedDefaultSection` and stops reading,
//! so callers can tell it apart from an unreadable file.
//!
//! [`load_default_responses`] applies the recovery policy on top of the parser:
//! - unreadable source: log it, keep the responses completed so far;
//! - malformed source: log it, discard everything parsed;
//! - empty result: substitute the single fallback response.
//!
//! The resulting [`DefaultResponses`] is never empty.
//!
use crate::common::fs::io;
use crate::core::error::{ResponderError, SourceResult, CONSECUTIVE_BLANK_LINES};
use rand::Rng;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Response used when the default source yields nothing usable.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

/// Accumulator for the paragraph in progress and the current run of blank lines.
#[derive(Debug, Default)]
struct ParseState {
    body: Vec<String>,
    blank_run: usize,
}

/// Incremental parser for the default-response source.
#[derive(Debug)]
pub struct DefaultResponseBuilder {
    origin: PathBuf,
    responses: Vec<String>,
    state: ParseState,
    line_no: usize,
}

impl DefaultResponseBuilder {
    /// `origin` labels errors raised by [`push_line`](Self::push_line).
    pub fn new(origin: &Path) -> Self {
        Self {
            origin: origin.to_path_buf(),
            responses: Vec::new(),
            state: ParseState::default(),
            line_no: 0,
        }
    }

    /// Feeds one line (without terminator) to the parser.
    ///
    /// # Errors
    ///
    /// Returns `ResponderError::MalformedDefaultSection` on the second blank
    /// line of a run. The builder should not be fed further lines after that.
    pub fn push_line(&mut self, line: &str) -> SourceResult<()> {
        self.line_no += 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            self.state.blank_run += 1;
            if self.state.blank_run >= 2 {
                return Err(ResponderError::MalformedDefaultSection {
                    path: self.origin.clone(),
                    line: self.line_no,
                    message: CONSECUTIVE_BLANK_LINES.to_string(),
                });
            }
            self.close_paragraph();
        } else {
            self.state.blank_run = 0;
            self.state.body.push(trimmed.to_string());
        }
        Ok(())
    }

    fn close_paragraph(&mut self) {
        if !self.state.body.is_empty() {
            self.responses.push(self.state.body.join(" "));
            self.state.body.clear();
        }
    }

    /// Closes a trailing paragraph and returns every response.
    pub fn finish(mut self) -> Vec<String> {
        self.close_paragraph();
        self.responses
    }

    /// Returns the paragraphs closed so far, dropping one still in progress.
    pub fn into_completed(self) -> Vec<String> {
        self.responses
    }
}

/// Parses a complete default-response source from `reader`.
///
/// # Errors
///
/// - `ResponderError::MalformedDefaultSection` on two consecutive blank lines.
/// - `ResponderError::SourceUnavailable` if the source cannot be read.
pub fn parse_default_responses<R: BufRead>(reader: R, origin: &Path) -> SourceResult<Vec<String>> {
    let mut builder = DefaultResponseBuilder::new(origin);
    io::for_each_ascii_line(reader, origin, |line| builder.push_line(line))?;
    Ok(builder.finish())
}

/// Ordered, never-empty list of fallback responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultResponses {
    responses: Vec<String>,
}

impl DefaultResponses {
    /// Wraps `responses`, substituting `[fallback]` when it is empty.
    pub fn with_fallback(responses: Vec<String>, fallback: &str) -> Self {
        if responses.is_empty() {
            info!("No default responses available, using fallback {:?}", fallback);
            return Self {
                responses: vec![fallback.to_string()],
            };
        }
        Self { responses }
    }

    /// Picks one response uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.responses.len());
        &self.responses[index]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.responses
    }

    pub fn contains(&self, response: &str) -> bool {
        self.responses.iter().any(|r| r == response)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Always `false` for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl Default for DefaultResponses {
    fn default() -> Self {
        Self::with_fallback(Vec::new(), FALLBACK_RESPONSE)
    }
}

/// Reads the default responses from `path`, applying the recovery policy.
pub fn load_default_responses(path: &Path, fallback: &str) -> DefaultResponses {
    let mut builder = DefaultResponseBuilder::new(path);
    let outcome = io::for_each_line_in_file(path, |line| builder.push_line(line));

    let responses = match outcome {
        Ok(()) => builder.finish(),
        Err(err @ ResponderError::MalformedDefaultSection { .. }) => {
            warn!("Error loading default responses: {}", err);
            Vec::new()
        }
        Err(err) => {
            warn!("Error reading default responses: {}", err);
            builder.into_completed()
        }
    };
    info!("Loaded {} default responses from {:?}", responses.len(), path);
    DefaultResponses::with_fallback(responses, fallback)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn parse(source: &str) -> SourceResult<Vec<String>> {
        parse_default_responses(Cursor::new(source), Path::new("default.txt"))
    }

    #[test]
    fn test_paragraphs_in_source_order() {
        assert_eq!(parse("A\n\nB\n").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_multi_line_paragraphs_are_joined() {
        let responses = parse(
            "That sounds odd.\n  Could you describe\nthat in more detail?\n\nNo other customer\nhas complained.",
        )
        .unwrap();
        assert_eq!(
            responses,
            vec![
                "That sounds odd. Could you describe that in more detail?",
                "No other customer has complained.",
            ]
        );
    }

    #[test]
    fn test_classic_mac_line_endings() {
        assert_eq!(parse("A\r\rB").unwrap(), vec!["A", "B"]);
        assert!(matches!(
            parse("A\r\r\rB"),
            Err(ResponderError::MalformedDefaultSection { line: 3, .. })
        ));
    }

    #[test]
    fn test_leading_and_trailing_single_blank_lines_are_allowed() {
        assert_eq!(parse("\nA\n\n").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_whitespace_only_line_counts_as_blank() {
        let result = parse("A\n   \n\t\nB\n");
        assert!(matches!(
            result,
            Err(ResponderError::MalformedDefaultSection { line: 3, .. })
        ));
    }

    #[test]
    fn test_two_blank_lines_are_malformed() {
        match parse("A\n\n\nB\n") {
            Err(ResponderError::MalformedDefaultSection { path, line, message }) => {
                assert_eq!(path, PathBuf::from("default.txt"));
                assert_eq!(line, 3);
                assert_eq!(message, CONSECUTIVE_BLANK_LINES);
            }
            other => panic!("expected MalformedDefaultSection, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_source_parses_to_nothing() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_with_fallback_never_empty() {
        let defaults = DefaultResponses::with_fallback(Vec::new(), FALLBACK_RESPONSE);
        assert_eq!(defaults.as_slice(), [FALLBACK_RESPONSE.to_string()]);
        assert!(!defaults.is_empty());

        let defaults = DefaultResponses::with_fallback(vec!["x".into()], FALLBACK_RESPONSE);
        assert_eq!(defaults.as_slice(), ["x".to_string()]);
    }

    #[test]
    fn test_choose_stays_within_the_list() {
        let defaults =
            DefaultResponses::with_fallback(vec!["a".into(), "b".into(), "c".into()], "unused");
        let mut rng = StdRng::seed_from_u64(7);
        let picked: HashSet<String> = (0..200)
            .map(|_| defaults.choose(&mut rng).to_string())
            .collect();
        assert!(picked.iter().all(|p| defaults.contains(p)));
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_load_malformed_file_discards_parsed_responses() -> crate::core::error::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("default.txt");
        fs::write(&path, "kept?\n\nno\n\n\nlater\n")?;

        let defaults = load_default_responses(&path, FALLBACK_RESPONSE);
        assert_eq!(defaults.as_slice(), [FALLBACK_RESPONSE.to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_uses_fallback() -> crate::core::error::Result<()> {
        let dir = tempdir()?;
        let defaults = load_default_responses(&dir.path().join("missing.txt"), FALLBACK_RESPONSE);
        assert_eq!(defaults.as_slice(), [FALLBACK_RESPONSE.to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_keeps_paragraphs_before_a_decoding_failure() -> crate::core::error::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("default.txt");
        fs::write(&path, "first\n\nsecond \u{ff}\n\nthird\n")?;

        let defaults = load_default_responses(&path, FALLBACK_RESPONSE);
        assert_eq!(defaults.as_slice(), ["first".to_string()]);
        Ok(())
    }
}
