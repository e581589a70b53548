//! # Response Table
//!
//! File: cli/src/responder/table.rs
//!
//! ## Overview
//!
//! Builds the mapping from trigger word to response text out of a keyed source:
//!
//! ```text
//! key1,key2,key3
//! response line 1
//! response line 2
//!
//! key4
//! single-line response
//! ```
//!
//! A non-blank line seen while no entry is open is a keys line: it is split on
//! commas and each key is trimmed, with empty keys dropped. Every following
//! non-blank line is trimmed and appended to the body, separated by a single
//! space. A blank line, or the end of the source, closes the entry and the body
//! is stored once per key. A key that appears again later is overwritten.
//!
//! A source that cannot be read is not fatal: [`load_response_table`] logs the
//! failure and keeps the entries that were complete before it.
//!
use crate::common::fs::io;
use crate::core::error::SourceResult;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, warn};

/// One keys line together with the body that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEntry {
    pub keys: Vec<String>,
    pub body: String,
}

impl ResponseEntry {
    /// Splits a keys line on commas, trimming each key and dropping empty ones.
    pub fn parse_keys(line: &str) -> Vec<String> {
        line.split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Mapping from trigger key to response text.
///
/// Read-only once built. Iteration order of the keys is unspecified.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: HashMap<String, String>,
}

impl ResponseTable {
    /// Parses a complete keyed source from `reader`.
    ///
    /// `origin` labels errors. Use [`load_response_table`] to read a file with
    /// the recover-and-continue policy applied.
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> SourceResult<Self> {
        let mut builder = ResponseTableBuilder::new();
        io::for_each_ascii_line(reader, origin, |line| {
            builder.push_line(line);
            Ok(())
        })?;
        Ok(builder.finish())
    }

    /// Stores `entry.body` under every key of the entry.
    pub fn insert_entry(&mut self, entry: ResponseEntry) {
        for key in entry.keys {
            if let Some(previous) = self.entries.insert(key.clone(), entry.body.clone()) {
                debug!("Key {:?} redefined, replacing {:?}", key, previous);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Entry currently being accumulated.
#[derive(Debug)]
struct PendingEntry {
    keys: Vec<String>,
    lines: Vec<String>,
}

impl PendingEntry {
    fn into_entry(self) -> ResponseEntry {
        ResponseEntry {
            keys: self.keys,
            body: self.lines.join(" "),
        }
    }
}

/// Incremental parser for the keyed source, fed one physical line at a time.
#[derive(Debug, Default)]
pub struct ResponseTableBuilder {
    table: ResponseTable,
    pending: Option<PendingEntry>,
}

impl ResponseTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (without terminator) to the parser.
    pub fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.close_entry();
            return;
        }
        match self.pending.as_mut() {
            Some(pending) => pending.lines.push(trimmed.to_string()),
            None => {
                self.pending = Some(PendingEntry {
                    keys: ResponseEntry::parse_keys(trimmed),
                    lines: Vec::new(),
                });
            }
        }
    }

    fn close_entry(&mut self) {
        if let Some(pending) = self.pending.take() {
            let entry = pending.into_entry();
            if entry.keys.is_empty() {
                warn!("Response {:?} has no keys and was skipped", entry.body);
            }
            self.table.insert_entry(entry);
        }
    }

    /// Closes any open entry and returns the finished table.
    pub fn finish(mut self) -> ResponseTable {
        self.close_entry();
        self.table
    }

    /// Returns only the entries closed so far, dropping an open one.
    ///
    /// Used when reading stopped part-way through an entry.
    pub fn into_completed(self) -> ResponseTable {
        self.table
    }
}

/// Reads the response table from `path`.
///
/// Never fails: an unreadable source is logged and yields whatever entries
/// were complete before the failure, which may be none.
pub fn load_response_table(path: &Path) -> ResponseTable {
    let mut builder = ResponseTableBuilder::new();
    let outcome = io::for_each_line_in_file(path, |line| {
        builder.push_line(line);
        Ok(())
    });

    let table = match outcome {
        Ok(()) => builder.finish(),
        Err(err) => {
            warn!("Error reading response table: {}", err);
            builder.into_completed()
        }
    };
    info!("Loaded {} response keys from {:?}", table.len(), path);
    table
}
