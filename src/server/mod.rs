//! Server module for Hitlog
//!
//! Contains the main server initialization and runtime logic.
//!
//! # Module Structure
//!
//! - `config`: Configuration structures for all server components
//! - `loader`: Configuration loading from files and environment
//! - `validation`: Startup configuration checks
//! - `init`: Component wiring, router assembly and the run loop

pub mod config;
mod init;
mod loader;
mod validation;

pub use init::{build_app, build_summary_service, run};
pub use loader::load_config;
pub use validation::validate_config;
