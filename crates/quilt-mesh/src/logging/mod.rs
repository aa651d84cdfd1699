//! Logging utilities.
//!
//! This module centralizes logger initialization and common diagnostics.
//! The library itself only emits through the standard `log` facade (the
//! missing-border fallback and unreadable-texture paths); embedding hosts
//! that already install a logger can ignore this module entirely.

mod init;

pub use init::{LoggingConfig, init_logging};
