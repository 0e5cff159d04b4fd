//! Logging setup.
//!
//! The pipeline logs through the `log` facade only; binaries and tests that
//! want output install `env_logger` once via [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
