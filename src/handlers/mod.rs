//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Fixed liveness response on `/health`
//! - **Identity** (`identity`) - Instance, host and time for every other path

mod health_check;
mod identity;

pub use health_check::*;
pub use identity::*;
