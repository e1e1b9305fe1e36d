//! # Centralized Error Handling
//!
//! Error types for every stage of the server's life: reading configuration,
//! binding the listener, and answering requests. Request handlers return
//! [`AppResult`], which converts into an HTTP response on failure.

use std::io;
use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors raised while answering a request.
///
/// The identity handler only fails if the system clock reports a date that
/// cannot be written as a four-digit-year ISO-8601 string.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("timestamp formatting error")]
    Timestamp(#[from] time::error::Format),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Timestamp(e) => {
                error!(?e, "Failed to format request timestamp");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;

/// Invalid values found while reading configuration from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for `{var}`: expected a TCP port number")]
    InvalidPort { var: &'static str, value: String },
}

/// Fatal errors that stop the server process.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error")]
    Serve(#[source] io::Error),
}
