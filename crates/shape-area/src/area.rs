//! Computed areas and how they print.
//!
//! Rectangle areas are exact integers; circle and triangle areas are `f64`.
//! Floats print in shortest round-trip form, always with a fractional part
//! (`6.0`, not `6`), and switch to exponent notation with a signed,
//! two-digit-minimum exponent (`3.14e+20`, `1e-05`) outside `[1e-4, 1e16)`.

use std::fmt;

/// Lower bound (inclusive) of the plain-decimal range for floats.
const PLAIN_MIN: f64 = 1e-4;

/// Upper bound (exclusive) of the plain-decimal range for floats.
const PLAIN_MAX: f64 = 1e16;

/// The area of a single shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Area {
    /// Exact integer area.
    Integer(i128),
    /// Floating point area.
    Float(f64),
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Area::Integer(v) => write!(f, "{}", v),
            Area::Float(v) => f.write_str(&format_float(v)),
        }
    }
}

/// Format a float in shortest round-trip form.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = v.abs();
    if magnitude != 0.0 && !(PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return format_exponent(v);
    }

    let mut s = format!("{}", v);
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Exponent form: `{:e}` gives `1.5e-5`, we want `1.5e-05`.
fn format_exponent(v: f64) -> String {
    let s = format!("{:e}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}
