use tracing::info;

use crate::config::Config;

/// Application state shared across requests. Read-only after startup.
#[derive(Debug)]
pub struct AppState {
    /// Value reported as `instanceId` in identity responses.
    pub instance_id: String,
}

impl AppState {
    /// Creates the application state from loaded configuration.
    pub fn new(config: &Config) -> Self {
        info!(instance_id = %config.instance_id, "Initializing application state");

        Self {
            instance_id: config.instance_id.clone(),
        }
    }
}
