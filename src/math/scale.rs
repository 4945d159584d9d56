//! Rescaling raw metrics onto the unit interval.
//!
//! Numerical notes:
//! - A degenerate column (`max == min`, including a single candidate) carries no
//!   ranking information, so every entry maps to the midpoint `0.5` instead of
//!   dividing by zero.
//! - Results are clamped to `[0, 1]` so float drift never leaks out of range.

/// Value assigned to every entry of a degenerate column.
pub const DEGENERATE_MIDPOINT: f64 = 0.5;

/// Span below which a column is treated as degenerate.
const SPAN_EPS: f64 = 1e-12;

/// Min-max rescale `values` onto `[0, 1]`.
///
/// With `higher_is_better = false` the scale is inverted, so the smallest raw
/// value maps to `1.0`.
pub fn min_max(values: &[f64], higher_is_better: bool) -> Vec<f64> {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let span = hi - lo;
    if !(span.is_finite() && span > SPAN_EPS) {
        return vec![DEGENERATE_MIDPOINT; values.len()];
    }

    values
        .iter()
        .map(|&v| {
            let u = (v - lo) / span;
            let u = if higher_is_better { u } else { 1.0 - u };
            clamp_unit(u)
        })
        .collect()
}

/// Score a raw value against a fixed ceiling: `1 - v / ceiling` (or `v / ceiling`
/// when higher is better), clamped to `[0, 1]`.
pub fn against_ceiling(value: f64, ceiling: f64, higher_is_better: bool) -> f64 {
    if !(ceiling.is_finite() && ceiling > 0.0) {
        return DEGENERATE_MIDPOINT;
    }
    let u = value / ceiling;
    let u = if higher_is_better { u } else { 1.0 - u };
    clamp_unit(u)
}

/// Clamp to `[0, 1]`, mapping NaN to `0`.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
