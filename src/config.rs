//! # Runtime Configuration
//!
//! Configuration is read from environment variables once at startup.
//! `main` loads a `.env` file with `dotenvy` first, so values can live
//! there during local development.
//!
//! ## Environment Variables
//!
//! - `INSTANCE_ID` - Identifier reported in every identity response
//! - `PORT` - Listening port, defaults to [`DEFAULT_PORT`]

use std::env;
use std::net::SocketAddr;

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::utils::constant::*;

/// Settings the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the TCP listener binds to.
    pub listen_addr: SocketAddr,
    /// Value reported as `instanceId`.
    pub instance_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(LISTEN_HOST, DEFAULT_PORT),
            instance_id: UNKNOWN_INSTANCE_ID.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of an
    /// environment variable or `None` if it is unset.
    ///
    /// An empty `INSTANCE_ID` counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let instance_id = lookup(INSTANCE_ID_VAR)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| {
                warn!(
                    var = INSTANCE_ID_VAR,
                    default = UNKNOWN_INSTANCE_ID,
                    "Instance id not set, using default"
                );
                UNKNOWN_INSTANCE_ID.to_string()
            });

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let config = Self {
            listen_addr: SocketAddr::new(LISTEN_HOST, port),
            instance_id,
        };
        debug!(?config, "Loaded configuration");

        Ok(config)
    }
}
