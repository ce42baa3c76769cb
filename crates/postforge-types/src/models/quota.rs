//! Per-client daily quota models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Successful generations allowed per client per calendar day.
pub const DAILY_REQUEST_LIMIT: u32 = 5;

/// Cookie name prefix; the full name is `request_count_<YYYY-MM-DD>`.
pub const QUOTA_COOKIE_PREFIX: &str = "request_count_";

/// Quota counter for one client on one calendar day.
///
/// There is no server-side copy: the counter travels in a cookie and a
/// state for a previous day is never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaState {
    /// Calendar day this counter belongs to
    pub date: NaiveDate,
    /// Successful generations so far on `date`
    pub count: u32,
}

impl QuotaState {
    /// Zero state for a day with no cookie.
    pub fn fresh(date: NaiveDate) -> Self {
        Self { date, count: 0 }
    }

    /// Cookie name for the given day.
    pub fn cookie_name_for(date: NaiveDate) -> String {
        format!("{}{}", QUOTA_COOKIE_PREFIX, date.format("%Y-%m-%d"))
    }

    pub fn cookie_name(&self) -> String {
        Self::cookie_name_for(self.date)
    }

    /// Whether another request may be admitted.
    pub fn is_admitted(&self) -> bool {
        self.count < DAILY_REQUEST_LIMIT
    }

    pub fn remaining(&self) -> u32 {
        DAILY_REQUEST_LIMIT.saturating_sub(self.count)
    }

    /// State after one more successful generation.
    pub fn advanced(&self) -> Self {
        Self { date: self.date, count: self.count.saturating_add(1) }
    }
}

/// Read-only view of a client's quota, returned by `GET /api/quota`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSnapshot {
    pub remaining_requests: u32,
    pub limit: u32,
    /// RFC 3339 timestamp of the end of the current day
    pub resets_at: String,
}
