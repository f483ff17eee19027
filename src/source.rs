//! Capture-log boundary: turns `timestamp,code` records into [`KeyEvent`]s.
//!
//! The decoder itself never sees a malformed record; everything suspect is
//! rejected here.

use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::key::{Key, KeyEvent};

/// Errors surfaced while reading a capture log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("line {line}: expected `timestamp,code`, got {found:?}")]
    MalformedRecord { line: usize, found: String },
    #[error("line {line}: timestamp is not a non-negative integer: {value:?}")]
    BadTimestamp { line: usize, value: String },
    #[error("line {line}: key code is not an unsigned integer: {value:?}")]
    BadKeyCode { line: usize, value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses one `timestamp,code` record. `lineno` is 1-based, for diagnostics.
pub fn parse_record(record: &str, lineno: usize) -> Result<KeyEvent, LogError> {
    let mut fields = record.split(',');
    let (Some(time), Some(code), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(LogError::MalformedRecord {
            line: lineno,
            found: record.to_string(),
        });
    };

    let time: i64 = time.trim().parse().map_err(|_| LogError::BadTimestamp {
        line: lineno,
        value: time.trim().to_string(),
    })?;
    if time < 0 {
        return Err(LogError::BadTimestamp {
            line: lineno,
            value: time.to_string(),
        });
    }

    let code: u16 = code.trim().parse().map_err(|_| LogError::BadKeyCode {
        line: lineno,
        value: code.trim().to_string(),
    })?;

    Ok(KeyEvent::new(time, Key::from_code(code)))
}

/// Reads a whole capture log in occurrence order. Blank lines are skipped;
/// any malformed record aborts the read.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<KeyEvent>, LogError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(parse_record(&line, idx + 1)?);
    }
    debug!(target: "source", count = events.len(), "log_read");
    Ok(events)
}
