//! baremo-core
//!
//! Pure domain types for pure-tone audiometry: the measured frequency set,
//! per-ear threshold maps, and audiometry records. No scoring logic — this is
//! the shared vocabulary of the baremo workspace.

pub mod error;
pub mod models;
