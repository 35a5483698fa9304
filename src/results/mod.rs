//! Append-only result log and history read-back.

mod error;
mod store;

pub use error::ResultLogError;
pub use store::{History, HistorySummary, ResultLog};
