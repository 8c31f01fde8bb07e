//! Resolution of a binaural score into a disability percentage and its
//! class or grade label.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::{PercentageStrategy, ScoringConfig};
use crate::diagnosis::HearingLossType;
use crate::tables::rd_888::{self, DisabilityClass, DisabilityGrade};
use crate::tables::{dsa_934, rd_1971};

/// The label/range pair shown on reports, from either a class or a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassOrGrade {
    pub label: String,
    pub range: String,
}

impl From<DisabilityClass> for ClassOrGrade {
    fn from(class: DisabilityClass) -> Self {
        Self {
            label: class.label().to_string(),
            range: class.range().to_string(),
        }
    }
}

impl From<DisabilityGrade> for ClassOrGrade {
    fn from(grade: DisabilityGrade) -> Self {
        Self {
            label: grade.label().to_string(),
            range: grade.range().to_string(),
        }
    }
}

/// Final disability valuation for one audiometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisabilityAssessment {
    pub percentage: f64,
    pub class_or_grade: ClassOrGrade,
}

/// Resolve a binaural score under the configured strategy. Total over the
/// numeric domain: non-finite scores count as 0 and out-of-table scores
/// saturate.
pub fn resolve(
    binaural_score: f64,
    diagnosis_od: HearingLossType,
    diagnosis_oi: HearingLossType,
    config: &ScoringConfig,
) -> DisabilityAssessment {
    let score = if binaural_score.is_finite() {
        binaural_score
    } else {
        0.0
    };
    match config.percentage_strategy {
        PercentageStrategy::PiecewiseLadder => {
            let exclusively_conductive = config.conductive_table_override
                && diagnosis_od == HearingLossType::Conductive
                && diagnosis_oi == HearingLossType::Conductive;
            let percentage = dsa_934::percentage(score, exclusively_conductive);
            DisabilityAssessment {
                percentage,
                class_or_grade: rd_888::class_for(percentage).into(),
            }
        }
        PercentageStrategy::InterpolatedTable => {
            let percentage = rd_1971::percentage(score);
            DisabilityAssessment {
                percentage,
                class_or_grade: rd_888::class_for(percentage).into(),
            }
        }
        PercentageStrategy::GradeBucket => {
            let percentage = score.clamp(0.0, 100.0);
            DisabilityAssessment {
                percentage,
                class_or_grade: rd_888::grade_for(percentage).into(),
            }
        }
    }
}
