//! Generators for unique form values.
//!
//! Uniqueness comes from millisecond timestamps and random numbers rather than
//! any coordination with the application, so re-running a scenario never
//! collides with rows created by earlier runs.

use chrono::Utc;
use rand::Rng;

/// Unique email for a new rustacean, derived from the current timestamp.
pub fn unique_email() -> String {
    format!("test-{}@example.com", Utc::now().timestamp_millis())
}

/// Unique name for a new crate, derived from the current timestamp.
pub fn unique_crate_name() -> String {
    format!("crate-{}", Utc::now().timestamp_millis())
}

/// Random numeric code for a new crate.
pub fn random_crate_code() -> String {
    rand::rng().random_range(0..1_000_000u32).to_string()
}

/// Description recording when the test run created the record.
pub fn run_description() -> String {
    format!("Created by test run at {}", Utc::now().to_rfc3339())
}
