//! RD 1971/1999 combined binaural hearing loss (PABC) table: sum-based
//! binaural scores → loss percentage, with linear interpolation between the
//! published keys.

use std::sync::LazyLock;

use super::resolve_interpolated;

/// Percentage step per 5 dB of weighted binaural sum above 100.
const STEP_PCT: f64 = 1.9;

static PABC_TABLE: LazyLock<Vec<(f64, f64)>> = LazyLock::new(|| {
    let mut rows = vec![(100.0, 0.0)];
    for i in 1u16.. {
        let key = 100.0 + 5.0 * f64::from(i);
        let pct = STEP_PCT * f64::from(i);
        if pct >= 100.0 {
            rows.push((key, 100.0));
            break;
        }
        rows.push((key, pct));
    }
    rows
});

/// Hearing-loss percentage for a sum-based binaural score. Scores at or
/// below 100 are 0 %; scores beyond the table clamp to 100 %.
pub fn percentage(binaural_score: f64) -> f64 {
    resolve_interpolated(&PABC_TABLE, binaural_score)
}
