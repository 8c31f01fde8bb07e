use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown audiometric frequency: {0} Hz")]
    UnknownFrequency(u16),
}
