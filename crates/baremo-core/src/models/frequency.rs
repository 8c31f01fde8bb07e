use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The frequencies measured in a standard pure-tone audiogram, in Hz.
pub const FREQUENCIES: [u16; 7] = [250, 500, 1000, 2000, 3000, 4000, 8000];

/// Frequencies entering the regulatory threshold average and the monaural
/// sums of Orden DSA/934/2023.
pub const KEY_FREQUENCIES: [u16; 4] = [500, 1000, 2000, 4000];

/// Conversational frequencies used by the RD 1971/1999 sum formula.
pub const CONVERSATIONAL_FREQUENCIES: [u16; 4] = [500, 1000, 2000, 3000];

/// Whether `freq` belongs to the measured audiogram set.
pub fn is_measured(freq: u16) -> bool {
    FREQUENCIES.contains(&freq)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Ear {
    /// Oído derecho (right ear).
    Od,
    /// Oído izquierdo (left ear).
    Oi,
}
