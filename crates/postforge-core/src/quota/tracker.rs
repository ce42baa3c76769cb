use axum::http::HeaderMap;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use postforge_types::{ClientError, QuotaSnapshot, QuotaState, DAILY_REQUEST_LIMIT};
use tracing::{debug, warn};

use super::cookie::{find_cookie, parse_count};

/// Today's quota as presented by the client. Cookies for other days are
/// ignored, so a new day always starts at 0.
pub fn read_quota(headers: &HeaderMap, today: NaiveDate) -> QuotaState {
    let name = QuotaState::cookie_name_for(today);
    match find_cookie(headers, &name) {
        Some(raw) => {
            let count = parse_count(raw);
            debug!("[Quota] {}={:?} -> {}", name, raw, count);
            QuotaState { date: today, count }
        },
        None => QuotaState::fresh(today),
    }
}

/// Admission gate. Returns the pre-request state on success.
pub fn admit(headers: &HeaderMap, today: NaiveDate) -> Result<QuotaState, ClientError> {
    let state = read_quota(headers, today);
    if state.is_admitted() {
        Ok(state)
    } else {
        warn!(
            "[Quota] Rejected: {} of {} requests used on {}",
            state.count, DAILY_REQUEST_LIMIT, state.date
        );
        Err(ClientError::QuotaExceeded)
    }
}

/// `Set-Cookie` value persisting `state` until `expires`, the last instant
/// of its day.
pub fn issue_cookie(state: &QuotaState, expires: DateTime<FixedOffset>) -> String {
    let expires = expires.with_timezone(&Utc);
    format!(
        "{}={}; Path=/; Expires={}; HttpOnly; SameSite=Strict",
        state.cookie_name(),
        state.count,
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

pub fn snapshot(state: &QuotaState, resets_at: DateTime<FixedOffset>) -> QuotaSnapshot {
    QuotaSnapshot {
        remaining_requests: state.remaining(),
        limit: DAILY_REQUEST_LIMIT,
        resets_at: resets_at.to_rfc3339(),
    }
}
