//! Logger setup for the command-line binary.
//!
//! Library code only talks to the `log` facade; this is the one place that
//! picks a backend.

mod init;

pub use init::{init_logging, LoggingConfig};
