//! Logging setup.
//!
//! The library itself only emits through the `log` facade; binaries call
//! [`init_logging`] early in `main` to install an `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig, FILTER_ENV};
