//! Binaural combination of two monaural loss measures.

use baremo_core::models::{CONVERSATIONAL_FREQUENCIES, EarThresholds, KEY_FREQUENCIES};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::average::{average, sum};
use crate::config::BinauralFormula;

/// The binaural score together with the per-ear quantities that produced it.
///
/// `monaural_od`/`monaural_oi` hold whatever monaural measure the formula
/// weights: impairment percentages for `ImpairmentDsa2023`, key-frequency
/// averages for `PabcDirect`, conversational sums for `SumRd1971`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BinauralBreakdown {
    pub formula: BinauralFormula,
    pub sum_od: f64,
    pub sum_oi: f64,
    pub monaural_od: f64,
    pub monaural_oi: f64,
    pub score: f64,
}

/// Combine both ears' air-conduction thresholds into one binaural score.
pub fn combine(
    va_od: &EarThresholds,
    va_oi: &EarThresholds,
    formula: BinauralFormula,
) -> BinauralBreakdown {
    match formula {
        BinauralFormula::ImpairmentDsa2023 => {
            let sum_od = sum(va_od, &KEY_FREQUENCIES);
            let sum_oi = sum(va_oi, &KEY_FREQUENCIES);
            let monaural_od = monaural_impairment(sum_od);
            let monaural_oi = monaural_impairment(sum_oi);
            BinauralBreakdown {
                formula,
                sum_od,
                sum_oi,
                monaural_od,
                monaural_oi,
                score: better_ear_weighted(monaural_od, monaural_oi),
            }
        }
        BinauralFormula::PabcDirect => {
            let monaural_od = finite_or_zero(average(va_od, &KEY_FREQUENCIES));
            let monaural_oi = finite_or_zero(average(va_oi, &KEY_FREQUENCIES));
            BinauralBreakdown {
                formula,
                sum_od: sum(va_od, &KEY_FREQUENCIES),
                sum_oi: sum(va_oi, &KEY_FREQUENCIES),
                monaural_od,
                monaural_oi,
                // OD keeps the 5x weight even when OI is the better ear.
                score: (5.0 * monaural_od + monaural_oi) / 6.0,
            }
        }
        BinauralFormula::SumRd1971 => {
            let sum_od = finite_or_zero(sum(va_od, &CONVERSATIONAL_FREQUENCIES));
            let sum_oi = finite_or_zero(sum(va_oi, &CONVERSATIONAL_FREQUENCIES));
            BinauralBreakdown {
                formula,
                sum_od,
                sum_oi,
                monaural_od: sum_od,
                monaural_oi: sum_oi,
                score: better_ear_weighted(sum_od, sum_oi),
            }
        }
    }
}

/// Monaural impairment percentage from a key-frequency threshold sum:
/// ((sum / 4) − 25) · 1.5, floored at 0 % and capped at 100 %.
pub fn monaural_impairment(threshold_sum: f64) -> f64 {
    let threshold_sum = finite_or_zero(threshold_sum);
    ((threshold_sum / 4.0 - 25.0).max(0.0) * 1.5).min(100.0)
}

/// Weight the better of the two measures 5× against the worse:
/// (5·min + max) / 6.
pub fn better_ear_weighted(a: f64, b: f64) -> f64 {
    let a = finite_or_zero(a);
    let b = finite_or_zero(b);
    (5.0 * a.min(b) + a.max(b)) / 6.0
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
