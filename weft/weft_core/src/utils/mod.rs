//! Utility types.
//!
//! Configuration of the interception engine and the diagnostics it records.

pub mod config;
pub mod logging;

pub use config::InterceptionConfig;
pub use logging::{Diagnostic, DiagnosticKind, LogLevel};
