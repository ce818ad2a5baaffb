//! `lastUpdated` rendering.
//!
//! The value is an ISO-8601 date-time without offset, microsecond precision
//! when the sub-second part is non-zero, followed by a literal `Z`. Which
//! wall clock feeds it is configurable: `local` keeps the historical output
//! (local time labelled `Z`), `utc` makes the suffix truthful.

use chrono::{Local, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Wall clock used for `lastUpdated`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    /// Local wall-clock time with a `Z` appended
    #[default]
    Local,
    /// UTC time, so the `Z` suffix is accurate
    Utc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampConfig {
    #[serde(default)]
    pub clock: Clock,
}

impl Clock {
    /// Current time on this clock, rendered for `lastUpdated`.
    pub fn now(self) -> String {
        let naive = match self {
            Clock::Local => Local::now().naive_local(),
            Clock::Utc => Utc::now().naive_utc(),
        };
        render(naive)
    }
}

/// Render a naive date-time as `YYYY-MM-DDTHH:MM:SS[.ffffff]Z`.
pub fn render(at: NaiveDateTime) -> String {
    // Leap seconds carry nanosecond() >= 1_000_000_000.
    let micros = (at.nanosecond() % 1_000_000_000) / 1_000;
    let mut out = if micros == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        format!("{}.{:06}", at.format("%Y-%m-%dT%H:%M:%S"), micros)
    };
    out.push('Z');
    out
}
