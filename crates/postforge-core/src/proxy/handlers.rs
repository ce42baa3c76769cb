//! Generate and quota handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use postforge_types::{ClientError, GenerateResponse};
use tracing::{info, warn};

use crate::gateway;
use crate::proxy::{server::AppState, ApiError};
use crate::quota;

/// `POST /api/generate`
///
/// Quota admission runs before body validation, so a capped client sees
/// the quota error even for a malformed body. The cookie is only reissued
/// after a successful generation.
pub async fn handle_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let current = quota::admit(&headers, state.clock.today())?;

    let body = body.map_err(|rejection| {
        warn!("[Generate] Body rejected: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ClientError::PromptTooLong
        } else {
            ClientError::MalformedRequest
        }
    })?;

    let request = gateway::parse_request(&body).inspect_err(|e| {
        warn!("[Generate] Rejected before upstream: {}", e.kind());
    })?;

    info!(
        "[Generate] Admitted: mode={} prompt_chars={} used={}",
        request.mode,
        request.prompt.chars().count(),
        current.count
    );

    let content = state.gateway.generate(&request).await?;

    let next = current.advanced();
    let cookie = quota::issue_cookie(&next, state.clock.end_of_day(next.date));
    Ok((
        [(SET_COOKIE, cookie)],
        Json(GenerateResponse { content, remaining_requests: next.remaining() }),
    ))
}

/// `GET /api/quota`: read-only, never reissues the cookie.
pub async fn handle_quota(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let current = quota::read_quota(&headers, state.clock.today());
    Json(quota::snapshot(&current, state.clock.end_of_day(current.date)))
}
