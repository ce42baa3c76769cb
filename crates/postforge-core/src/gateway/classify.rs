//! Upstream failure → client error mapping.
//!
//! Rules are checked in order and the first match wins. A 503 indicator is
//! checked before the RPC status codes, so a 503 carrying `UNAVAILABLE`
//! reports the overload message rather than the unavailable one.

use postforge_types::ClientError;

use crate::upstream::UpstreamFailure;

type Predicate = fn(&UpstreamFailure) -> bool;

fn is_service_unavailable(failure: &UpstreamFailure) -> bool {
    failure.http_status == Some(503)
        || failure.message.contains("503")
        || failure.message.contains("Service Unavailable")
}

fn is_invalid_argument(failure: &UpstreamFailure) -> bool {
    failure.signals("INVALID_ARGUMENT")
}

fn is_permission_denied(failure: &UpstreamFailure) -> bool {
    failure.signals("PERMISSION_DENIED")
}

fn is_resource_exhausted(failure: &UpstreamFailure) -> bool {
    failure.signals("RESOURCE_EXHAUSTED")
}

fn is_unavailable(failure: &UpstreamFailure) -> bool {
    failure.signals("UNAVAILABLE")
}

const RULES: &[(Predicate, ClientError)] = &[
    (is_service_unavailable, ClientError::UpstreamOverloaded),
    (is_invalid_argument, ClientError::UpstreamInvalidArgument),
    (is_permission_denied, ClientError::UpstreamPolicyViolation),
    (is_resource_exhausted, ClientError::UpstreamQuotaExhausted),
    (is_unavailable, ClientError::UpstreamUnavailable),
];

pub fn classify(failure: &UpstreamFailure) -> ClientError {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(failure))
        .map(|(_, error)| *error)
        .unwrap_or(ClientError::UpstreamUnknown)
}
