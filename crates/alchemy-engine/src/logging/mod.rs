//! Logging utilities.
//!
//! Centralizes logger initialization for the studio binaries. Library code
//! only talks to the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
