//! The immutable result value one evaluation produces.

use baremo_core::models::EarThresholds;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::binaural::BinauralBreakdown;
use crate::diagnosis::HearingLossType;
use crate::disability::DisabilityAssessment;

/// Per-ear slice of an evaluation: the thresholds it was computed from,
/// the diagnosis, and the key-frequency VA average and sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EarResult {
    #[ts(type = "{ [freq: number]: number | null }")]
    pub va: EarThresholds,
    #[ts(type = "{ [freq: number]: number | null }")]
    pub vo: EarThresholds,
    pub diagnosis: HearingLossType,
    pub avg_va: f64,
    pub sum_va: f64,
}

/// Complete outcome of evaluating one audiogram under one configuration.
///
/// Rebuilt from raw thresholds on every evaluation; report and audiogram
/// collaborators consume it as-is and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AudiometryResult {
    pub od: EarResult,
    pub oi: EarResult,
    pub binaural: BinauralBreakdown,
    pub disability: DisabilityAssessment,
}

impl AudiometryResult {
    pub fn binaural_score(&self) -> f64 {
        self.binaural.score
    }

    pub fn disability_percentage(&self) -> f64 {
        self.disability.percentage
    }
}
