//! baremo-scoring
//!
//! Audiometric scoring rules for the Spanish disability baremos. Pure
//! functions over `baremo-core` types — no I/O, no shared state. Covers the
//! hearing-loss diagnosis, the binaural combination formulas, and the
//! disability tables of RD 1971/1999, RD 888/2022, and Orden DSA/934/2023,
//! all selected through [`ScoringConfig`].

pub mod average;
pub mod binaural;
pub mod comparison;
pub mod config;
pub mod diagnosis;
pub mod disability;
pub mod result;
pub mod tables;

use baremo_core::models::{AudiometryRecord, Ear, EarThresholds, KEY_FREQUENCIES, Thresholds};

pub use crate::binaural::BinauralBreakdown;
pub use crate::comparison::{AudiometryComparison, Trend, compare};
pub use crate::config::{
    BinauralFormula, DiagnosisVariant, PercentageStrategy, RegulatoryScheme, ScoringConfig,
};
pub use crate::diagnosis::HearingLossType;
pub use crate::disability::{ClassOrGrade, DisabilityAssessment};
pub use crate::result::{AudiometryResult, EarResult};
pub use crate::tables::rd_888::{DisabilityClass, DisabilityGrade};

/// Evaluate a complete audiogram under one configuration.
///
/// A full recomputation from raw thresholds every time: per-ear diagnosis
/// and VA statistics, the binaural combination, and the disability
/// resolution, assembled into one immutable [`AudiometryResult`].
pub fn evaluate(thresholds: &Thresholds, config: &ScoringConfig) -> AudiometryResult {
    let od = ear_result(thresholds.va(Ear::Od), thresholds.vo(Ear::Od), config);
    let oi = ear_result(thresholds.va(Ear::Oi), thresholds.vo(Ear::Oi), config);
    let binaural = binaural::combine(
        thresholds.va(Ear::Od),
        thresholds.va(Ear::Oi),
        config.binaural_formula,
    );
    let disability = disability::resolve(binaural.score, od.diagnosis, oi.diagnosis, config);
    AudiometryResult {
        od,
        oi,
        binaural,
        disability,
    }
}

/// Evaluate a saved record's thresholds.
pub fn evaluate_record(record: &AudiometryRecord, config: &ScoringConfig) -> AudiometryResult {
    evaluate(&record.thresholds, config)
}

fn ear_result(va: &EarThresholds, vo: &EarThresholds, config: &ScoringConfig) -> EarResult {
    EarResult {
        diagnosis: diagnosis::classify(va, vo, config.diagnosis_variant),
        avg_va: average::average(va, &KEY_FREQUENCIES),
        sum_va: average::sum(va, &KEY_FREQUENCIES),
        va: va.clone(),
        vo: vo.clone(),
    }
}
