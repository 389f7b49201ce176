//! Hitlog Core - Log summary service
//!
//! Reads the event log, aggregates it, and asks a completion provider for a
//! narrative summary. Provider failures never escape: they become a
//! deterministic sentence built from the aggregates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod prompt;
pub mod service;
pub mod stats;

pub use error::{Error, Result};
pub use service::{LogSummary, LogSummaryService, Narrative, SummaryOptions, SummaryReport};
pub use stats::{DateRange, LogStats};
