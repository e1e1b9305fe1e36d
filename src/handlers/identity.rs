//! # Identity Handler
//!
//! Answers every request that is not a health check with the instance,
//! host and time that served it.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::models::{AppState, IdentityRecord};

/// Reports which instance handled the request.
///
/// ANY <every path except /health>
///
/// # Returns
///
/// - `200 OK` with a JSON [`IdentityRecord`]
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn identity(State(state): State<Arc<AppState>>) -> AppResult<Json<IdentityRecord>> {
    let record = IdentityRecord::capture(&state.instance_id)?;
    debug!(hostname = %record.hostname, timestamp = %record.timestamp, "Captured identity");

    Ok(Json(record))
}
