mod identity;
mod state;

pub use identity::{IdentityRecord, current_hostname, iso_timestamp};
pub use state::AppState;
