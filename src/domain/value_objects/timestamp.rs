//! Record timestamps
//!
//! Written in the Unix `date` layout (`Fri Oct 16 09:30:00 UTC 2026`) in UTC so
//! they stay human readable. Values written by other tools are preserved
//! verbatim.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const UNIX_DATE_UTC: &str = "%a %b %e %H:%M:%S UTC %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.format(UNIX_DATE_UTC).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
