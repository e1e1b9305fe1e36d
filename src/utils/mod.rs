//! # Utility Modules
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Defaults and environment variable names
//! - **Shutdown** (`shutdown`) - Signal handling for graceful shutdown
//! - **Telemetry** (`telemetry`) - Global `tracing` subscriber setup

pub mod constant;
pub mod shutdown;
pub mod telemetry;
