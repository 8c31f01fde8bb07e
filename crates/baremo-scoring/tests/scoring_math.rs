use baremo_core::models::{CONVERSATIONAL_FREQUENCIES, EarThresholds, KEY_FREQUENCIES};
use baremo_scoring::average::{average, paired_samples, sum};
use baremo_scoring::binaural::{better_ear_weighted, combine, monaural_impairment};
use baremo_scoring::config::BinauralFormula;

fn flat(level: i32) -> EarThresholds {
    EarThresholds::lenient(KEY_FREQUENCIES.map(|f| (f, level)))
}

#[test]
fn average_of_absent_thresholds_is_zero() {
    let empty = EarThresholds::empty();
    assert_eq!(average(&empty, &KEY_FREQUENCIES), 0.0);
    assert_eq!(sum(&empty, &KEY_FREQUENCIES), 0.0);
}

#[test]
fn average_skips_absent_entries() {
    let thresholds = EarThresholds::strict([(500, 40), (1000, 60)]);
    assert_eq!(average(&thresholds, &KEY_FREQUENCIES), 50.0);
    assert_eq!(sum(&thresholds, &KEY_FREQUENCIES), 100.0);
}

#[test]
fn average_uses_only_the_requested_subset() {
    let thresholds = EarThresholds::lenient([(250, 90), (8000, 90), (500, 20), (1000, 20), (2000, 20), (3000, 40), (4000, 20)]);
    assert_eq!(average(&thresholds, &KEY_FREQUENCIES), 20.0);
    assert_eq!(average(&thresholds, &CONVERSATIONAL_FREQUENCIES), 25.0);
}

#[test]
fn paired_samples_counts_frequencies_measured_on_both_pathways() {
    let va = EarThresholds::strict([(500, 40), (1000, 45)]);
    let vo = EarThresholds::strict([(1000, 30), (2000, 30)]);
    assert_eq!(paired_samples(&va, &vo, &KEY_FREQUENCIES), 1);
    assert_eq!(paired_samples(&va, &EarThresholds::empty(), &KEY_FREQUENCIES), 0);
}

#[test]
fn monaural_impairment_floors_at_zero_and_caps_at_hundred() {
    assert_eq!(monaural_impairment(100.0), 0.0);
    assert_eq!(monaural_impairment(80.0), 0.0);
    assert_eq!(monaural_impairment(180.0), 30.0);
    assert_eq!(monaural_impairment(500.0), 100.0);
}

#[test]
fn non_finite_inputs_count_as_zero() {
    assert_eq!(monaural_impairment(f64::NAN), 0.0);
    assert_eq!(better_ear_weighted(f64::NAN, 60.0), 10.0);
    assert_eq!(better_ear_weighted(f64::INFINITY, f64::NEG_INFINITY), 0.0);
}

#[test]
fn dsa_formula_weights_the_better_ear_five_times() {
    // OD sum 180 → 30 % impairment, OI sum 100 → 0 %.
    let breakdown = combine(&flat(45), &flat(25), BinauralFormula::ImpairmentDsa2023);
    assert_eq!(breakdown.monaural_od, 30.0);
    assert_eq!(breakdown.monaural_oi, 0.0);
    assert_eq!(breakdown.score, 5.0);

    let swapped = combine(&flat(25), &flat(45), BinauralFormula::ImpairmentDsa2023);
    assert_eq!(swapped.score, breakdown.score);
}

#[test]
fn sum_formula_combines_100_and_200_to_116_67() {
    let od = EarThresholds::lenient(CONVERSATIONAL_FREQUENCIES.map(|f| (f, 25)));
    let oi = EarThresholds::lenient(CONVERSATIONAL_FREQUENCIES.map(|f| (f, 50)));
    let breakdown = combine(&od, &oi, BinauralFormula::SumRd1971);
    assert_eq!(breakdown.sum_od, 100.0);
    assert_eq!(breakdown.sum_oi, 200.0);
    assert!((breakdown.score - 116.67).abs() < 0.01);

    let swapped = combine(&oi, &od, BinauralFormula::SumRd1971);
    assert_eq!(swapped.score, breakdown.score);
}

#[test]
fn pabc_formula_always_weights_od_five_times() {
    // Known asymmetry carried from the historic formula: swapping the ears
    // changes the score.
    let breakdown = combine(&flat(10), &flat(40), BinauralFormula::PabcDirect);
    assert_eq!(breakdown.score, 15.0);

    let swapped = combine(&flat(40), &flat(10), BinauralFormula::PabcDirect);
    assert_eq!(swapped.score, 35.0);
}
