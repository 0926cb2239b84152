//! Time and timestamp helpers.

use chrono::{DateTime, SubsecRound, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time, truncated to microseconds.
///
/// Storage keeps timestamps as RFC 3339 text with microsecond precision, so
/// truncating here keeps a freshly created record identical to the one read
/// back later.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}
