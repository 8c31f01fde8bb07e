use std::collections::BTreeMap;

use baremo_core::models::{AudiometryRecord, RecordKey};
use tracing::info;

use crate::error::RegistryError;

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Replaced,
}

/// In-memory audiometry registry keyed by (history number, exam date).
#[derive(Debug, Default)]
pub struct RecordRegistry {
    records: BTreeMap<RecordKey, AudiometryRecord>,
}

impl RecordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a record. A record with the same key is only replaced when
    /// `overwrite` is set; otherwise the save is refused so the caller can
    /// ask for confirmation.
    pub fn save(
        &mut self,
        record: AudiometryRecord,
        overwrite: bool,
    ) -> Result<SaveOutcome, RegistryError> {
        if record.history_number.trim().is_empty() {
            return Err(RegistryError::EmptyHistoryNumber);
        }
        let key = record.key();
        if self.records.contains_key(&key) && !overwrite {
            return Err(RegistryError::DuplicateRecord { key });
        }
        let replaced = self.records.insert(key.clone(), record).is_some();
        info!(
            registry.history = %key.history_number,
            registry.date = %key.audiometry_date,
            registry.replaced = replaced,
            "audiometry saved"
        );
        if replaced {
            Ok(SaveOutcome::Replaced)
        } else {
            Ok(SaveOutcome::Created)
        }
    }

    /// Remove and return the record for `key`.
    pub fn delete(&mut self, key: &RecordKey) -> Result<AudiometryRecord, RegistryError> {
        let record = self
            .records
            .remove(key)
            .ok_or_else(|| RegistryError::RecordNotFound { key: key.clone() })?;
        info!(
            registry.history = %key.history_number,
            registry.date = %key.audiometry_date,
            "audiometry deleted"
        );
        Ok(record)
    }

    pub fn get(&self, key: &RecordKey) -> Option<&AudiometryRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bulk-add records, skipping any whose key is already present or whose
    /// history number is empty. Returns how many were added.
    pub fn merge<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = AudiometryRecord>,
    {
        let mut added = 0;
        for record in records {
            if record.history_number.trim().is_empty() {
                continue;
            }
            let key = record.key();
            if self.records.contains_key(&key) {
                continue;
            }
            self.records.insert(key, record);
            added += 1;
        }
        info!(registry.added = added, "records merged");
        added
    }

    /// All records, newest exam first.
    pub fn records_by_date_desc(&self) -> Vec<&AudiometryRecord> {
        let mut records: Vec<&AudiometryRecord> = self.records.values().collect();
        records.sort_by(|a, b| b.audiometry_date.cmp(&a.audiometry_date));
        records
    }
}
