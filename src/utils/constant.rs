//! # Application Constants
//!
//! This module defines configuration constants used throughout hostecho.
//! These constants control the listening address, environment variable names
//! and the defaults applied when those variables are absent.

use std::net::{IpAddr, Ipv4Addr};

/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 4000;

/// Interface the listener binds to. All interfaces, so a load balancer on
/// another host can reach it.
pub const LISTEN_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Value reported as `instanceId` when `INSTANCE_ID` is unset or empty.
pub const UNKNOWN_INSTANCE_ID: &str = "unknown";

/// Path answered by the health check handler.
pub const HEALTH_PATH: &str = "/health";

/// Body of the health check response.
pub const HEALTH_BODY: &str = "OK";

/// Environment variable carrying the instance identifier.
pub const INSTANCE_ID_VAR: &str = "INSTANCE_ID";

/// Environment variable overriding [`DEFAULT_PORT`].
pub const PORT_VAR: &str = "PORT";

/// Environment variable selecting the log output format (`json` or pretty).
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "hostecho=info,tower_http=info";

/// Target of the startup announcement. Always enabled at `info`, whatever
/// `RUST_LOG` says.
pub const STARTUP_LOG_TARGET: &str = "hostecho::startup";
