//! Regulatory lookup tables and the two resolution primitives they share.
//!
//! Every table is an explicit sorted list of pairs; resolution either walks
//! boundary rows (piecewise) or interpolates between keys. Out-of-domain
//! inputs always saturate to the nearest row, never error.

pub mod dsa_934;
pub mod rd_1971;
pub mod rd_888;

/// Resolve against ordered (upper bound, value) rows: the first row whose
/// bound is ≥ the input wins. The input is rounded to one decimal first,
/// because the published boundaries carry one-decimal precision. Inputs past
/// the last bound saturate to the last value.
pub(crate) fn resolve_piecewise(table: &[(f64, f64)], input: f64) -> f64 {
    let rounded = (input * 10.0).round() / 10.0;
    for &(bound, value) in table {
        if rounded <= bound {
            return value;
        }
    }
    table.last().map_or(0.0, |&(_, value)| value)
}

/// Resolve against sorted (key, value) rows with linear interpolation
/// between adjacent keys. Inputs outside the key range clamp to the nearest
/// end; an exact key hit returns that row's value.
pub(crate) fn resolve_interpolated(table: &[(f64, f64)], input: f64) -> f64 {
    let Some(&(first_key, first_value)) = table.first() else {
        return 0.0;
    };
    let &(last_key, last_value) = table.last().unwrap_or(&(first_key, first_value));
    if input <= first_key {
        return first_value;
    }
    if input >= last_key {
        return last_value;
    }
    for pair in table.windows(2) {
        let (k0, v0) = pair[0];
        let (k1, v1) = pair[1];
        if input == k0 {
            return v0;
        }
        if input < k1 {
            return v0 + (input - k0) * (v1 - v0) / (k1 - k0);
        }
    }
    last_value
}
