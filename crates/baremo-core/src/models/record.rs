use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::threshold::Thresholds;

/// Identity of an audiometry record: one exam per patient history and date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordKey {
    pub history_number: String,
    pub audiometry_date: jiff::civil::Date,
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nº {} - {}", self.history_number, self.audiometry_date)
    }
}

/// A saved pure-tone audiometry exam.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AudiometryRecord {
    pub id: Uuid,
    pub history_number: String,
    pub audiometry_date: jiff::civil::Date,
    pub observations: Option<String>,
    pub thresholds: Thresholds,
    pub created_at: jiff::Timestamp,
}

impl AudiometryRecord {
    pub fn new(
        history_number: impl Into<String>,
        audiometry_date: jiff::civil::Date,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            history_number: history_number.into(),
            audiometry_date,
            observations: None,
            thresholds,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn with_observations(mut self, observations: impl Into<String>) -> Self {
        self.observations = Some(observations.into());
        self
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            history_number: self.history_number.clone(),
            audiometry_date: self.audiometry_date,
        }
    }
}
