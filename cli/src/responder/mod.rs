//! # Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! The `Responder` owns a [`ResponseTable`] and a [`DefaultResponses`] list and
//! turns a set of input words into a reply:
//! - the first input word that is a key in the table selects its response;
//! - otherwise one default response is picked uniformly at random.
//!
//! Both structures are built eagerly when the responder is constructed and are
//! read-only afterwards. Construction never fails: unreadable or malformed
//! sources are logged and recovered from, and the default list always holds at
//! least one response.
//!
//! ## Architecture
//!
//! - `table`: parses the keyed source into a [`ResponseTable`].
//! - `defaults`: parses the paragraph source into [`DefaultResponses`].
//!
//! The random source is a type parameter so tests can inject a seeded one.
//!
//! ## Examples
//!
//! ```rust
//! use responder::core::config::SourcesConfig;
//! use responder::responder::Responder;
//! use std::collections::HashSet;
//!
//! // Neither file exists, so only the fallback response is available.
//! let sources = SourcesConfig::in_dir(std::path::Path::new("/nonexistent"));
//! let mut responder = Responder::with_seed(&sources, 42);
//!
//! let words: HashSet<String> = ["anything".to_string()].into_iter().collect();
//! assert_eq!(responder.generate_response(&words), "Could you elaborate on that?");
//! ```
//!
use crate::core::config::SourcesConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

pub mod defaults;
pub mod table;

pub use defaults::{load_default_responses, DefaultResponses, FALLBACK_RESPONSE};
pub use table::{load_response_table, ResponseEntry, ResponseTable};

/// Keyword-triggered response generator.
#[derive(Debug)]
pub struct Responder<R = StdRng> {
    table: ResponseTable,
    defaults: DefaultResponses,
    rng: R,
}

impl Responder<StdRng> {
    /// Builds a responder from the configured sources, seeded from OS entropy.
    pub fn new(sources: &SourcesConfig) -> Self {
        Self::load(sources, StdRng::from_entropy())
    }

    /// Builds a responder whose default picks are reproducible.
    pub fn with_seed(sources: &SourcesConfig, seed: u64) -> Self {
        Self::load(sources, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Responder<R> {
    /// Builds a responder from the configured sources using `rng` for default picks.
    pub fn load(sources: &SourcesConfig, rng: R) -> Self {
        let table = load_response_table(sources.responses_path());
        let defaults = load_default_responses(sources.defaults_path(), &sources.fallback_response);
        Self::from_parts(table, defaults, rng)
    }

    /// Assembles a responder from already-built parts.
    pub fn from_parts(table: ResponseTable, defaults: DefaultResponses, rng: R) -> Self {
        debug!(
            "Responder ready: {} keys, {} default responses",
            table.len(),
            defaults.len()
        );
        Self {
            table,
            defaults,
            rng,
        }
    }

    /// Returns the response for the first word found in the table, or a random
    /// default response if none is.
    ///
    /// Words are tried in the order `words` yields them. For a `HashSet` that
    /// order is unspecified, so input holding several known keys may match any
    /// one of them.
    pub fn generate_response<I, S>(&mut self, words: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if let Some(response) = self.table.get(word) {
                trace!("Matched key {:?}", word);
                return response.to_string();
            }
        }
        let response = self.defaults.choose(&mut self.rng).to_string();
        trace!("No key matched, picked default {:?}", response);
        response
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    pub fn defaults(&self) -> &DefaultResponses {
        &self.defaults
    }
}
