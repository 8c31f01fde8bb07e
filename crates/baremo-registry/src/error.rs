use baremo_core::models::RecordKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("a record already exists for {key}")]
    DuplicateRecord { key: RecordKey },

    #[error("no record found for {key}")]
    RecordNotFound { key: RecordKey },

    #[error("history number must not be empty")]
    EmptyHistoryNumber,
}
