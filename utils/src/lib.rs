//! Shared utilities for the ballot workspace.

pub mod logging;

pub use logging::{init_logging, init_tracing, LogFormat, LoggingError};
