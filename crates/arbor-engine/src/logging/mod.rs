//! Logging utilities.
//!
//! Centralizes logger initialization so every binary embedding the engine
//! configures the `log` facade the same way. No backend beyond `env_logger`
//! is imposed.

mod init;

pub use init::{LogConfig, init_logging};
