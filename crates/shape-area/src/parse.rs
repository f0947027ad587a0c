//! Line parser for the shape file format.
//!
//! Each line is `<kind>,<param1>[,<param2>]`. The kind is matched exactly;
//! parameters are integers with optional surrounding whitespace and an
//! optional sign.

use crate::error::MalformedReason;
use crate::shape::{Shape, ShapeKind};

/// Field separator.
pub const FIELD_SEPARATOR: char = ',';

/// Outcome of parsing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A recognised, well-formed shape.
    Shape(Shape),
    /// The first field is not a recognised kind.
    Skip,
}

/// Parse a single line (without its terminator).
pub fn parse_line(line: &str) -> Result<Parsed, MalformedReason> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let kind = match fields.next().and_then(ShapeKind::from_name) {
        Some(kind) => kind,
        None => return Ok(Parsed::Skip),
    };

    let params = fields
        .map(|field| {
            parse_int(field).ok_or_else(|| MalformedReason::InvalidInteger {
                kind,
                field: field.to_string(),
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    kind.construct(&params)
        .map(Parsed::Shape)
        .ok_or(MalformedReason::FieldCount {
            kind,
            expected: kind.arity(),
            found: params.len(),
        })
}

/// Parse an integer field, ignoring surrounding ASCII whitespace.
fn parse_int(field: &str) -> Option<i64> {
    field.trim_matches(|c: char| c.is_ascii_whitespace()).parse().ok()
}
