use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::frequency::{self, Ear, FREQUENCIES};

/// Hearing thresholds for one ear and one conduction pathway, keyed by
/// frequency in Hz.
///
/// The key set is always the full measured frequency set; a threshold is
/// either a level in dB HL or absent (`None`). On the wire a missing key
/// defaults to 0 dB HL and an explicit `null` stays absent, so plain
/// `{"500": 40, ...}` payloads follow the zero-default convention while
/// strict callers can still distinguish "not measured" from "0 dB HL".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<u16, Option<i32>>",
    into = "BTreeMap<u16, Option<i32>>"
)]
pub struct EarThresholds {
    levels: BTreeMap<u16, Option<i32>>,
}

impl EarThresholds {
    /// All frequencies at 0 dB HL.
    pub fn zeroed() -> Self {
        Self {
            levels: FREQUENCIES.iter().map(|&f| (f, Some(0))).collect(),
        }
    }

    /// All frequencies absent.
    pub fn empty() -> Self {
        Self {
            levels: FREQUENCIES.iter().map(|&f| (f, None)).collect(),
        }
    }

    /// Build thresholds under the zero-default convention: any frequency not
    /// given a level is treated as 0 dB HL. Entries at unknown frequencies
    /// are dropped.
    pub fn lenient<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u16, i32)>,
    {
        let mut thresholds = Self::zeroed();
        for (freq, level) in entries {
            if frequency::is_measured(freq) {
                thresholds.levels.insert(freq, Some(level));
            }
        }
        thresholds
    }

    /// Build thresholds keeping unmeasured frequencies absent instead of
    /// defaulting them to 0 dB HL.
    pub fn strict<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u16, i32)>,
    {
        let mut thresholds = Self::empty();
        for (freq, level) in entries {
            if frequency::is_measured(freq) {
                thresholds.levels.insert(freq, Some(level));
            }
        }
        thresholds
    }

    /// The level at `freq`, if measured.
    pub fn level(&self, freq: u16) -> Option<i32> {
        self.levels.get(&freq).copied().flatten()
    }

    /// The level at `freq` under the zero-default convention.
    pub fn level_or_zero(&self, freq: u16) -> i32 {
        self.level(freq).unwrap_or(0)
    }

    /// Set the level at a measured frequency.
    pub fn set(&mut self, freq: u16, level: i32) -> Result<(), CoreError> {
        if !frequency::is_measured(freq) {
            return Err(CoreError::UnknownFrequency(freq));
        }
        self.levels.insert(freq, Some(level));
        Ok(())
    }

    /// Clear the level at a measured frequency, leaving it absent.
    pub fn clear(&mut self, freq: u16) -> Result<(), CoreError> {
        if !frequency::is_measured(freq) {
            return Err(CoreError::UnknownFrequency(freq));
        }
        self.levels.insert(freq, None);
        Ok(())
    }

    /// Iterate over all measured frequencies in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Option<i32>)> + '_ {
        self.levels.iter().map(|(&f, &level)| (f, level))
    }
}

impl Default for EarThresholds {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<BTreeMap<u16, Option<i32>>> for EarThresholds {
    fn from(map: BTreeMap<u16, Option<i32>>) -> Self {
        let levels = FREQUENCIES
            .iter()
            .map(|&f| (f, map.get(&f).copied().unwrap_or(Some(0))))
            .collect();
        Self { levels }
    }
}

impl From<EarThresholds> for BTreeMap<u16, Option<i32>> {
    fn from(thresholds: EarThresholds) -> Self {
        thresholds.levels
    }
}

/// One threshold map per ear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EarPair {
    #[ts(type = "{ [freq: number]: number | null }")]
    pub od: EarThresholds,
    #[ts(type = "{ [freq: number]: number | null }")]
    pub oi: EarThresholds,
}

impl EarPair {
    pub fn ear(&self, ear: Ear) -> &EarThresholds {
        match ear {
            Ear::Od => &self.od,
            Ear::Oi => &self.oi,
        }
    }
}

/// A complete audiogram: air (VA) and bone (VO) conduction thresholds for
/// both ears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Thresholds {
    pub va: EarPair,
    pub vo: EarPair,
}

impl Thresholds {
    /// Air-conduction thresholds for one ear.
    pub fn va(&self, ear: Ear) -> &EarThresholds {
        self.va.ear(ear)
    }

    /// Bone-conduction thresholds for one ear.
    pub fn vo(&self, ear: Ear) -> &EarThresholds {
        self.vo.ear(ear)
    }
}
