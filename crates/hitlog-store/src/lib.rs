//! Hitlog Store - Append-only event log
//!
//! This crate provides the persistence layer for captured request metadata:
//! - Record: `LogRecord`, one captured endpoint hit
//! - Log: `EventLog`, a CSV file that is only ever appended to

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod log;
pub mod record;

pub use error::{Error, Result};
pub use log::{EventLog, HEADER};
pub use record::{LogRecord, UNKNOWN};
