use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::{make_error_msg, Result};
use crate::status_code::StatusCode;

/// A UTC timestamp wrapper around `chrono::DateTime<Utc>`.
///
/// The metadata service stores times as unsigned milliseconds since the
/// Unix epoch at whole-second granularity; see
/// [`UtcTime::to_unix_millis_truncated`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtcTime {
    inner: DateTime<Utc>,
}

impl UtcTime {
    /// Get the current UTC time.
    pub fn now() -> Self {
        Self { inner: Utc::now() }
    }

    /// Create from a chrono `DateTime<Utc>`.
    pub fn from_chrono(dt: DateTime<Utc>) -> Self {
        Self { inner: dt }
    }

    /// Create from seconds and sub-second nanoseconds since the epoch.
    ///
    /// Returns `None` when the value is out of chrono's range.
    pub fn from_timestamp(secs: i64, nanos: u32) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, nanos).map(Self::from_chrono)
    }

    /// Create from milliseconds since the epoch.
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Self::from_chrono)
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_chrono(&self) -> &DateTime<Utc> {
        &self.inner
    }

    /// Milliseconds since Unix epoch, keeping sub-second precision.
    pub fn timestamp_millis(&self) -> i64 {
        self.inner.timestamp_millis()
    }

    /// Whole seconds since Unix epoch (floored).
    pub fn timestamp(&self) -> i64 {
        self.inner.timestamp()
    }

    /// Encode as unsigned milliseconds since the epoch, dropping the
    /// sub-second part first: `floor(secs) * 1000`.
    ///
    /// Instants before the epoch fail with `INVALID_ARG`.
    pub fn to_unix_millis_truncated(&self) -> Result<u64> {
        match u64::try_from(self.timestamp())
            .ok()
            .and_then(|secs| secs.checked_mul(1000))
        {
            Some(millis) => Ok(millis),
            None => make_error_msg(
                StatusCode::INVALID_ARG,
                format!("time {} is before the unix epoch", self),
            ),
        }
    }
}

impl fmt::Debug for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UtcTime({})", self.inner.to_rfc3339())
    }
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.to_rfc3339())
    }
}

impl Default for UtcTime {
    fn default() -> Self {
        Self {
            inner: DateTime::<Utc>::default(),
        }
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self { inner: dt }
    }
}

impl From<UtcTime> for DateTime<Utc> {
    fn from(t: UtcTime) -> Self {
        t.inner
    }
}

impl From<std::time::SystemTime> for UtcTime {
    fn from(t: std::time::SystemTime) -> Self {
        Self {
            inner: DateTime::<Utc>::from(t),
        }
    }
}
