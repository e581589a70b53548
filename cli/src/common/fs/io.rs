//! # Responder Source I/O
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the line-oriented reading of response source files.
//! Both source formats (the keyed response table and the default responses) are
//! plain 7-bit ASCII text consumed one physical line at a time, so the parsers
//! share a single reader here instead of each opening and decoding files on
//! their own.
//!
//! ## Architecture
//!
//! - **`open_source`**: Opens a file and wraps it in a `BufReader`. The handle is
//!   owned by the returned reader, so it is closed on every exit path when the
//!   reader is dropped.
//! - **`for_each_ascii_line`**: Streams lines from any `BufRead`, ending a line at
//!   `\n`, `\r\n` or a lone `\r`, rejects lines containing non-ASCII bytes and
//!   hands each line to a visitor closure. The visitor may stop the walk by
//!   returning an error.
//! - **`for_each_line_in_file`**: `open_source` followed by `for_each_ascii_line`.
//!
//! Read failures and decoding failures both surface as
//! `ResponderError::SourceUnavailable` carrying the path of the source.
//!
//! ## Usage
//!
//! ```rust
//! use responder::common::fs::io;
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let mut lines = Vec::new();
//! io::for_each_ascii_line(Cursor::new("one\r\ntwo\n"), Path::new("inline"), |line| {
//!     lines.push(line.to_string());
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(lines, vec!["one", "two"]);
//! ```
//!
use crate::core::error::{ResponderError, SourceResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Opens the source file at `path` for buffered, line-oriented reading.
///
/// # Errors
///
/// Returns `ResponderError::SourceUnavailable` if the file cannot be opened.
pub fn open_source(path: &Path) -> SourceResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| ResponderError::unavailable(path, e))?;
    debug!("Opened source {:?}", path);
    Ok(BufReader::new(file))
}

/// Calls `visit` once for every line produced by `reader`.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Lines are passed without their
/// terminator. A trailing line with no terminator is still visited. `origin`
/// is only used to label errors.
///
/// # Errors
///
/// - `ResponderError::SourceUnavailable` if reading fails or a line holds a
///   byte outside the 7-bit ASCII range. Lines before the failing one have
///   already been visited.
/// - Any error returned by `visit`, unchanged. No further lines are read.
pub fn for_each_ascii_line<R, F>(mut reader: R, origin: &Path, mut visit: F) -> SourceResult<()>
where
    R: BufRead,
    F: FnMut(&str) -> SourceResult<()>,
{
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    // Set after a `\r`, so a directly following `\n` is swallowed.
    let mut skip_lf = false;
    loop {
        let available = reader
            .fill_buf()
            .map_err(|e| ResponderError::unavailable(origin, e))?;
        if available.is_empty() {
            if !buf.is_empty() {
                line_no += 1;
                emit_line(&buf, line_no, origin, &mut visit)?;
            }
            break;
        }

        let mut consumed = 0;
        let mut ended = false;
        for &byte in available {
            consumed += 1;
            if skip_lf {
                skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }
            match byte {
                b'\n' => {
                    ended = true;
                    break;
                }
                b'\r' => {
                    skip_lf = true;
                    ended = true;
                    break;
                }
                _ => buf.push(byte),
            }
        }
        reader.consume(consumed);

        if ended {
            line_no += 1;
            emit_line(&buf, line_no, origin, &mut visit)?;
            buf.clear();
        }
    }
    debug!("Read {} lines from {:?}", line_no, origin);
    Ok(())
}

fn emit_line<F>(buf: &[u8], line_no: usize, origin: &Path, visit: &mut F) -> SourceResult<()>
where
    F: FnMut(&str) -> SourceResult<()>,
{
    if !buf.is_ascii() {
        return Err(ResponderError::unavailable(
            origin,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {} contains a byte outside the ASCII range", line_no),
            ),
        ));
    }
    // ASCII is always valid UTF-8.
    let line = std::str::from_utf8(buf).map_err(|e| {
        ResponderError::unavailable(origin, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;

    trace!("{:?}:{}: {:?}", origin, line_no, line);
    visit(line)
}

/// Opens `path` and calls `visit` for each of its lines.
///
/// See [`for_each_ascii_line`] for the error behaviour.
pub fn for_each_line_in_file<F>(path: &Path, visit: F) -> SourceResult<()>
where
    F: FnMut(&str) -> SourceResult<()>,
{
    let reader = open_source(path)?;
    for_each_ascii_line(reader, path, visit)
}
