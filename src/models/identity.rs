//! Identity record returned to callers, plus the hostname and timestamp
//! helpers used to build it.

use serde::Serialize;
use time::{OffsetDateTime, macros::format_description};

/// Snapshot of which instance answered a request, and when.
///
/// Built fresh for every non-health request and dropped once serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    /// Identifier from `INSTANCE_ID`, or `unknown`.
    pub instance_id: String,
    /// Hostname reported by the operating system.
    pub hostname: String,
    /// UTC time the request was handled, e.g. `2024-05-01T09:30:12.345Z`.
    pub timestamp: String,
}

impl IdentityRecord {
    /// Captures the current hostname and time for `instance_id`.
    pub fn capture(instance_id: &str) -> Result<Self, time::error::Format> {
        Ok(Self {
            instance_id: instance_id.to_owned(),
            hostname: current_hostname(),
            timestamp: iso_timestamp(OffsetDateTime::now_utc())?,
        })
    }
}

/// Hostname of the machine. Non-UTF-8 names are converted lossily.
pub fn current_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

/// Formats `at` in UTC with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(time::UtcOffset::UTC).format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
}
