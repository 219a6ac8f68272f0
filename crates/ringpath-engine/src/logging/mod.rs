//! Logging utilities.
//!
//! The library itself only talks to the `log` facade. This module offers a
//! one-call `env_logger` setup for binaries, tests and demos that want to see
//! the builder's trace output.

mod init;

pub use init::{init_logging, LoggingConfig};
