use baremo_core::models::{AudiometryRecord, EarThresholds, Thresholds};
use baremo_scoring::comparison::{Trend, compare};
use baremo_scoring::config::{
    BinauralFormula, DiagnosisVariant, PercentageStrategy, RegulatoryScheme, ScoringConfig,
};
use baremo_scoring::diagnosis::HearingLossType;
use baremo_scoring::{evaluate, evaluate_record};

fn audiogram(od_va: EarThresholds, oi_va: EarThresholds) -> Thresholds {
    Thresholds {
        va: baremo_core::models::EarPair {
            od: od_va,
            oi: oi_va,
        },
        vo: baremo_core::models::EarPair::default(),
    }
}

fn flat(level: i32) -> EarThresholds {
    EarThresholds::lenient(baremo_core::models::KEY_FREQUENCIES.map(|f| (f, level)))
}

#[test]
fn silent_audiogram_scores_no_disability() {
    let result = evaluate(&Thresholds::default(), &ScoringConfig::dsa_934_2023());
    assert_eq!(result.od.diagnosis, HearingLossType::Normal);
    assert_eq!(result.oi.diagnosis, HearingLossType::Normal);
    assert_eq!(result.binaural_score(), 0.0);
    assert_eq!(result.disability_percentage(), 0.0);
    assert_eq!(
        result.disability.class_or_grade.label,
        "Clase 0 (Sin discapacidad)"
    );
}

#[test]
fn unilateral_loss_resolves_through_the_better_ear() {
    // OD sum 180 → 30 % monaural, OI perfect: binaural (5·0 + 30)/6 = 5,
    // table 5.3A row ≤ 6.4 → 4 %.
    let thresholds = Thresholds {
        va: baremo_core::models::EarPair {
            od: flat(45),
            oi: EarThresholds::zeroed(),
        },
        vo: baremo_core::models::EarPair {
            od: flat(45),
            oi: EarThresholds::zeroed(),
        },
    };
    let result = evaluate(&thresholds, &ScoringConfig::dsa_934_2023());
    assert_eq!(result.od.diagnosis, HearingLossType::Sensorineural);
    assert_eq!(result.od.avg_va, 45.0);
    assert_eq!(result.od.sum_va, 180.0);
    assert_eq!(result.binaural_score(), 5.0);
    assert_eq!(result.disability_percentage(), 4.0);
}

#[test]
fn evaluation_is_deterministic_and_state_free() {
    let thresholds = audiogram(flat(55), flat(35));
    let config = ScoringConfig::dsa_934_2023();

    let first = evaluate(&thresholds, &config);
    // Interleave an unrelated evaluation, then repeat.
    let _ = evaluate(&audiogram(flat(90), flat(90)), &config);
    let second = evaluate(&thresholds, &config);

    assert_eq!(first, second);
    assert_eq!(
        first.disability.class_or_grade,
        second.disability.class_or_grade
    );
}

#[test]
fn grade_bucket_strategy_reports_a_grade_label() {
    let config = ScoringConfig::rd_888_2022();
    let result = evaluate(&audiogram(flat(70), flat(70)), &config);
    // Sums 280 → 67.5 % monaural impairment both ears → binaural 67.5.
    assert!((result.binaural_score() - 67.5).abs() < 1e-9);
    assert_eq!(result.disability.class_or_grade.label, "Grado 3 (Grave)");
}

#[test]
fn scheme_presets_resolve_by_id() {
    let scheme = RegulatoryScheme::from_id("rd-1971-1999").unwrap();
    assert_eq!(scheme.name(), "RD 1971/1999");
    assert_eq!(
        scheme.config().binaural_formula,
        BinauralFormula::SumRd1971
    );
    assert!(RegulatoryScheme::from_id("rd-9999").is_none());
}

#[test]
fn config_deserializes_from_kebab_case_options() {
    let config: ScoringConfig = serde_json::from_str(
        r#"{
            "diagnosis_variant": "four-way",
            "binaural_formula": "sum-rd1971",
            "percentage_strategy": "interpolated-table",
            "conductive_table_override": false
        }"#,
    )
    .unwrap();
    assert_eq!(config.diagnosis_variant, DiagnosisVariant::FourWay);
    assert_eq!(config.binaural_formula, BinauralFormula::SumRd1971);
    assert_eq!(
        config.percentage_strategy,
        PercentageStrategy::InterpolatedTable
    );

    let defaulted: ScoringConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(defaulted, ScoringConfig::dsa_934_2023());
}

#[test]
fn comparison_reports_trend_and_class_change() {
    let date = jiff::civil::date(2025, 11, 3);
    let baseline = AudiometryRecord::new("H-1042", date, audiogram(flat(30), flat(30)));
    let follow_up = AudiometryRecord::new(
        "H-1042",
        date.saturating_add(jiff::Span::new().days(180)),
        audiogram(flat(60), flat(60)),
    );

    let config = ScoringConfig::dsa_934_2023();
    let comparison = compare(&baseline, &follow_up, &config);
    assert_eq!(comparison.trend, Trend::Worsened);
    assert!(comparison.disability_delta > 2.0);
    assert!(comparison.class_changed);

    let stable = compare(&baseline, &baseline, &config);
    assert_eq!(stable.trend, Trend::Stable);
    assert_eq!(stable.disability_delta, 0.0);
    assert!(!stable.class_changed);

    assert_eq!(
        evaluate_record(&baseline, &config),
        comparison.baseline
    );
}
