pub mod frequency;
pub mod record;
pub mod threshold;

pub use frequency::{CONVERSATIONAL_FREQUENCIES, Ear, FREQUENCIES, KEY_FREQUENCIES};
pub use record::{AudiometryRecord, RecordKey};
pub use threshold::{EarPair, EarThresholds, Thresholds};
