//! Longitudinal comparison of two audiometries (baseline vs follow-up).

use baremo_core::models::AudiometryRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::ScoringConfig;
use crate::result::AudiometryResult;
use crate::evaluate_record;

/// Disability-percentage change below which the evolution is reported as
/// stable, in points.
const STABLE_BAND_PCT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Worsened,
    Improved,
    Stable,
}

/// Structured comparison between two evaluated audiometries. Text rendering
/// is a report collaborator concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AudiometryComparison {
    pub baseline: AudiometryResult,
    pub follow_up: AudiometryResult,
    /// Follow-up disability percentage minus baseline, in points.
    pub disability_delta: f64,
    pub trend: Trend,
    pub class_changed: bool,
}

/// Evaluate two records under the same configuration and compare them.
pub fn compare(
    baseline: &AudiometryRecord,
    follow_up: &AudiometryRecord,
    config: &ScoringConfig,
) -> AudiometryComparison {
    compare_results(
        evaluate_record(baseline, config),
        evaluate_record(follow_up, config),
    )
}

/// Compare two already-evaluated results.
pub fn compare_results(
    baseline: AudiometryResult,
    follow_up: AudiometryResult,
) -> AudiometryComparison {
    let disability_delta = follow_up.disability_percentage() - baseline.disability_percentage();
    let trend = if disability_delta > STABLE_BAND_PCT {
        Trend::Worsened
    } else if disability_delta < -STABLE_BAND_PCT {
        Trend::Improved
    } else {
        Trend::Stable
    };
    let class_changed =
        baseline.disability.class_or_grade.label != follow_up.disability.class_or_grade.label;
    AudiometryComparison {
        baseline,
        follow_up,
        disability_delta,
        trend,
        class_changed,
    }
}
