//! Logging utilities.
//!
//! Centralizes logger initialization over the standard `log` facade so the
//! library itself never picks a backend; binaries opt in via
//! [`init_logging`].

mod init;

pub use init::{LoggingConfig, init_logging};
