//! Hearing-loss-type classification from one ear's air and bone thresholds.

use baremo_core::models::{EarThresholds, KEY_FREQUENCIES};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::average::{average, paired_samples};
use crate::config::DiagnosisVariant;

/// Normal-hearing ceiling for the key-frequency average, in dB HL.
const NORMAL_AVG_DB: f64 = 20.0;

/// Air-bone gap above which a conductive component is assumed, in dB.
const CONDUCTIVE_GAP_DB: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HearingLossType {
    Normal,
    Conductive,
    Sensorineural,
    Mixed,
    /// No branch matched, or no valid paired samples existed.
    Indeterminate,
}

impl HearingLossType {
    /// Clinical label as it appears on reports.
    pub fn label(&self) -> &'static str {
        match self {
            HearingLossType::Normal => "Audición Normal",
            HearingLossType::Conductive => "De Transmisión (Conductiva)",
            HearingLossType::Sensorineural => "Neurosensorial",
            HearingLossType::Mixed => "Mixta",
            HearingLossType::Indeterminate => "Indeterminada",
        }
    }
}

impl std::fmt::Display for HearingLossType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify one ear from its air (VA) and bone (VO) thresholds over the
/// key-frequency average. Ears with no measured VA/VO pair at any key
/// frequency are Indeterminate.
pub fn classify(
    va: &EarThresholds,
    vo: &EarThresholds,
    variant: DiagnosisVariant,
) -> HearingLossType {
    if paired_samples(va, vo, &KEY_FREQUENCIES) == 0 {
        return HearingLossType::Indeterminate;
    }
    let avg_va = average(va, &KEY_FREQUENCIES);
    let avg_vo = average(vo, &KEY_FREQUENCIES);
    match variant {
        DiagnosisVariant::GapDriven => gap_driven(avg_va, avg_vo),
        DiagnosisVariant::FourWay => four_way(avg_va, avg_vo),
    }
}

fn gap_driven(avg_va: f64, avg_vo: f64) -> HearingLossType {
    let avg_gap = avg_va - avg_vo;
    if avg_va <= NORMAL_AVG_DB {
        return HearingLossType::Normal;
    }
    if avg_gap > CONDUCTIVE_GAP_DB {
        if avg_vo <= NORMAL_AVG_DB {
            HearingLossType::Conductive
        } else {
            HearingLossType::Mixed
        }
    } else {
        HearingLossType::Sensorineural
    }
}

fn four_way(avg_va: f64, avg_vo: f64) -> HearingLossType {
    let avg_gap = avg_va - avg_vo;
    if avg_va <= NORMAL_AVG_DB && avg_vo <= NORMAL_AVG_DB {
        HearingLossType::Normal
    } else if avg_va > NORMAL_AVG_DB && avg_gap > CONDUCTIVE_GAP_DB && avg_vo <= NORMAL_AVG_DB {
        HearingLossType::Conductive
    } else if avg_va > NORMAL_AVG_DB && avg_gap <= CONDUCTIVE_GAP_DB {
        HearingLossType::Sensorineural
    } else if avg_va > NORMAL_AVG_DB && avg_vo > NORMAL_AVG_DB && avg_gap > CONDUCTIVE_GAP_DB {
        HearingLossType::Mixed
    } else {
        // Bone threshold above air with normal VA: measurement artifact.
        HearingLossType::Indeterminate
    }
}
