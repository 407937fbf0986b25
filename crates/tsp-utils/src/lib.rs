//! # track-shared-ptrs utilities
//!
//! Shared helpers for the launcher workspace. For now this is the logging
//! setup for the launcher's own diagnostics, built on `tracing`.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError, LoggingGuard};
pub use tracing::{debug, error, info, trace, warn};
