//! Frequency-subset averaging and summation primitives.

use baremo_core::models::EarThresholds;

/// Arithmetic mean of the thresholds at the given frequencies, skipping
/// absent entries. Returns 0.0 when no entry is present.
pub fn average(thresholds: &EarThresholds, frequencies: &[u16]) -> f64 {
    let mut total = 0.0;
    let mut count = 0u32;
    for &freq in frequencies {
        if let Some(level) = thresholds.level(freq) {
            total += f64::from(level);
            count += 1;
        }
    }
    if count == 0 { 0.0 } else { total / f64::from(count) }
}

/// Sum of the thresholds at the given frequencies, absent entries counting
/// as 0 dB HL.
pub fn sum(thresholds: &EarThresholds, frequencies: &[u16]) -> f64 {
    frequencies
        .iter()
        .map(|&freq| f64::from(thresholds.level_or_zero(freq)))
        .sum()
}

/// Number of frequencies in the subset where both pathways have a measured
/// threshold.
pub fn paired_samples(va: &EarThresholds, vo: &EarThresholds, frequencies: &[u16]) -> usize {
    frequencies
        .iter()
        .filter(|&&freq| va.level(freq).is_some() && vo.level(freq).is_some())
        .count()
}
