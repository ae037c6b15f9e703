//! Six-Decimal Bias Arithmetic
//!
//! Peg biases are IEEE-754 doubles rounded to 6 decimal places. Both the
//! rounding rule and the textual form feed the published peg map hash, so
//! they are pinned here and used nowhere else.
//!
//! ## Rounding
//!
//! ```text
//! round6(v) = round_half_away_from_zero(v * 1e6) / 1e6
//! ```
//!
//! ## Text form
//!
//! Shortest decimal that round-trips the double, no exponent, no trailing
//! zeros: `0.46878`, `0.5`, `1`, `0`.

use std::fmt::Write;

/// Scale factor for six decimal places.
pub const BIAS_SCALE: f64 = 1e6;

/// Round to 6 decimal places, ties away from zero.
#[inline]
pub fn round6(value: f64) -> f64 {
    (value * BIAS_SCALE).round() / BIAS_SCALE
}

/// Clamp a probability into [0, 1].
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Append the canonical text form of `value` to `out`.
///
/// Negative zero is written as `0`.
pub fn write_canonical(out: &mut String, value: f64) {
    if value == 0.0 {
        out.push('0');
    } else {
        // Writing to a String cannot fail.
        let _ = write!(out, "{value}");
    }
}

// =============================================================================
// TESTS
// =============================================================================
