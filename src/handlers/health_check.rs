//! # Health Check Handler
//!
//! Liveness endpoint probed by load balancers and orchestrators. It answers
//! every method and never touches the system.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::handlers::identity;
use crate::models::AppState;
use crate::utils::constant::HEALTH_BODY;

/// Health check endpoint that returns `200 OK` with body `OK`.
///
/// The body is sent without a `Content-Type` header. Only the bare
/// `/health` target counts: any query string, even an empty one after `?`,
/// is answered by [`identity`] instead.
#[instrument(skip_all)]
pub async fn health_check(state: State<Arc<AppState>>, uri: Uri) -> Response {
    if uri.query().is_some() {
        debug!(%uri, "Health path with query, answering with identity");
        return identity(state).await.into_response();
    }

    debug!("Health check endpoint accessed");
    (StatusCode::OK, Body::from(HEALTH_BODY)).into_response()
}
