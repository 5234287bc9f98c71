//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the crate goes
//! through the `log` facade; compile and link diagnostics for shader stages
//! are reported here as well as through structured error values.

mod init;

pub use init::{LoggingConfig, init_logging};
