use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How the per-ear hearing-loss type is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum DiagnosisVariant {
    /// Three-way decision driven by the air-bone gap.
    GapDriven,
    /// Four mutually exclusive branches over both averages, with an
    /// indeterminate fallback.
    FourWay,
}

/// How two monaural measures combine into one binaural score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum BinauralFormula {
    /// Orden DSA/934/2023: per-ear monaural impairment, better ear
    /// weighted 5×.
    ImpairmentDsa2023,
    /// Legacy PABC weighting over the key-frequency averages. OD is always
    /// weighted 5× regardless of which ear is better.
    PabcDirect,
    /// RD 1971/1999: conversational-frequency sums, better ear weighted 5×.
    SumRd1971,
}

/// How a binaural score resolves to a disability percentage or grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum PercentageStrategy {
    /// Tables 5.3A/5.3B of Orden DSA/934/2023, resolved by boundary ladder.
    PiecewiseLadder,
    /// RD 1971/1999 sparse table with linear interpolation between keys.
    InterpolatedTable,
    /// RD 888/2022 ordinal grade buckets.
    GradeBucket,
}

/// Configuration of one scoring run. Every knob is independent; the
/// regulatory presets below pick the combinations each scheme prescribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringConfig {
    pub diagnosis_variant: DiagnosisVariant,
    pub binaural_formula: BinauralFormula,
    pub percentage_strategy: PercentageStrategy,
    /// When true, exclusively conductive losses (both ears) resolve through
    /// table 5.3B instead of 5.3A.
    pub conductive_table_override: bool,
}

impl ScoringConfig {
    /// Orden DSA/934/2023 over RD 888/2022 tables. The current scheme.
    pub fn dsa_934_2023() -> Self {
        Self {
            diagnosis_variant: DiagnosisVariant::GapDriven,
            binaural_formula: BinauralFormula::ImpairmentDsa2023,
            percentage_strategy: PercentageStrategy::PiecewiseLadder,
            conductive_table_override: true,
        }
    }

    /// RD 888/2022 grade buckets.
    pub fn rd_888_2022() -> Self {
        Self {
            diagnosis_variant: DiagnosisVariant::FourWay,
            binaural_formula: BinauralFormula::ImpairmentDsa2023,
            percentage_strategy: PercentageStrategy::GradeBucket,
            conductive_table_override: false,
        }
    }

    /// RD 1971/1999 sum formula and interpolated PABC table.
    pub fn rd_1971_1999() -> Self {
        Self {
            diagnosis_variant: DiagnosisVariant::GapDriven,
            binaural_formula: BinauralFormula::SumRd1971,
            percentage_strategy: PercentageStrategy::InterpolatedTable,
            conductive_table_override: false,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::dsa_934_2023()
    }
}

/// The regulatory schemes this workspace can score under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RegulatoryScheme {
    #[serde(rename = "rd-1971-1999")]
    Rd1971_1999,
    #[serde(rename = "rd-888-2022")]
    Rd888_2022,
    #[serde(rename = "dsa-934-2023")]
    Dsa934_2023,
}

impl RegulatoryScheme {
    pub const ALL: [RegulatoryScheme; 3] = [
        RegulatoryScheme::Rd1971_1999,
        RegulatoryScheme::Rd888_2022,
        RegulatoryScheme::Dsa934_2023,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RegulatoryScheme::Rd1971_1999 => "rd-1971-1999",
            RegulatoryScheme::Rd888_2022 => "rd-888-2022",
            RegulatoryScheme::Dsa934_2023 => "dsa-934-2023",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RegulatoryScheme::Rd1971_1999 => "RD 1971/1999",
            RegulatoryScheme::Rd888_2022 => "RD 888/2022",
            RegulatoryScheme::Dsa934_2023 => "Orden DSA/934/2023",
        }
    }

    pub fn config(&self) -> ScoringConfig {
        match self {
            RegulatoryScheme::Rd1971_1999 => ScoringConfig::rd_1971_1999(),
            RegulatoryScheme::Rd888_2022 => ScoringConfig::rd_888_2022(),
            RegulatoryScheme::Dsa934_2023 => ScoringConfig::dsa_934_2023(),
        }
    }

    /// Look up a scheme by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}
