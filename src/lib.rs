//! # hostecho - Instance Identity Responder
//!
//! A small HTTP backend meant to sit behind a load balancer. `/health`
//! answers `200 OK`; every other request gets a JSON document naming the
//! instance, host and time that served it.
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven runtime configuration
//! - [`error`] - Error types for requests and startup
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Identity record and shared state
//! - [`utils`] - Constants, logging and shutdown helpers

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers::{health_check, identity};
use crate::models::AppState;
use crate::utils::constant::HEALTH_PATH;

/// Creates the Axum router answering every request.
///
/// Requests to `/health` with any method receive the health check response.
/// Everything else, including unknown paths and methods, falls through to the
/// identity handler, so the router never produces a 404 or 405.
pub fn app(config: &Config) -> Router {
    let state = Arc::new(AppState::new(config));

    Router::new()
        .route(HEALTH_PATH, any(health_check))
        .fallback(identity)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
