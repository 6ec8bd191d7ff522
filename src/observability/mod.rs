//! Logging setup
//!
//! # Principles
//!
//! 1. One log line = one event
//! 2. JSON by default, with explicit severity levels
//! 3. Store failures are logged in full here and never echoed to callers
//!
//! Filtering follows `RUST_LOG` (default `info`).

mod logger;

pub use logger::{init_logging, LogFormat};
