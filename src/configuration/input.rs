//! Body record stream.
//!
//! The first non-blank line holds the body count `n`; each of the next `n`
//! non-blank lines holds one record of eight whitespace-separated fields:
//!
//! ```text
//! id pos.x pos.y pos.z vel.x vel.y vel.z mass
//! ```
//!
//! Loading is all-or-nothing: any malformed line rejects the whole stream.

use std::io::BufRead;

use thiserror::Error;
use tracing::info;

use crate::simulation::states::{Body, BodyId, NVec3, System};

pub const FIELDS_PER_RECORD: usize = 8;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no input")]
    Empty,
    #[error("line {line}: invalid body count {text:?}")]
    BadCount { line: usize, text: String },
    #[error("line {line}: {reason}")]
    BadRecord { line: usize, reason: String },
    #[error("expected {expected} bodies, found {found}")]
    CountMismatch { expected: usize, found: usize },
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one record line into a body
pub fn parse_record(text: &str, line: usize) -> Result<Body, LoadError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != FIELDS_PER_RECORD {
        return Err(LoadError::BadRecord {
            line,
            reason: format!("expected {FIELDS_PER_RECORD} fields, found {}", fields.len()),
        });
    }

    let id = fields[0].parse::<u32>().map_err(|e| LoadError::BadRecord {
        line,
        reason: format!("invalid id {:?}: {e}", fields[0]),
    })?;

    let mut v = [0.0f64; FIELDS_PER_RECORD - 1];
    for (slot, field) in v.iter_mut().zip(&fields[1..]) {
        *slot = field.parse::<f64>().map_err(|e| LoadError::BadRecord {
            line,
            reason: format!("invalid number {field:?}: {e}"),
        })?;
    }

    Ok(Body::new(
        BodyId(id),
        NVec3::new(v[0], v[1], v[2]),
        NVec3::new(v[3], v[4], v[5]),
        v[6],
    ))
}

/// Read a count followed by that many records
pub fn read_bodies<R: BufRead>(reader: R) -> Result<Vec<Body>, LoadError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, l)| l.map(|text| (i + 1, text)))
        .filter(|l| !matches!(l, Ok((_, text)) if text.trim().is_empty()));

    let (line, text) = lines.next().ok_or(LoadError::Empty)??;
    let expected = text.trim().parse::<usize>().map_err(|_| LoadError::BadCount {
        line,
        text: text.trim().to_string(),
    })?;

    let mut bodies = Vec::with_capacity(expected.min(1 << 16));
    while let Some(l) = lines.next() {
        let (line, text) = l?;
        if bodies.len() == expected {
            return Err(LoadError::CountMismatch {
                expected,
                found: expected + 1 + lines.by_ref().count(),
            });
        }
        bodies.push(parse_record(&text, line)?);
    }

    if bodies.len() != expected {
        return Err(LoadError::CountMismatch {
            expected,
            found: bodies.len(),
        });
    }

    Ok(bodies)
}

impl System {
    /// Build a system from a record stream
    pub fn load<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let bodies = read_bodies(reader)?;
        info!(bodies = bodies.len(), "loaded bodies");
        Ok(System::new(bodies))
    }
}
