//! Generation gateway: validation, persona selection, upstream call and
//! failure mapping.

mod classify;
mod persona;
mod validation;

pub use classify::classify;
pub use persona::{config_for_mode, EDIT_PERSONA, GENERATE_PERSONA, SAFETY_THRESHOLD};
pub use validation::{parse_body, parse_request, validate};

use postforge_types::{ClientError, GenerationRequest};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::upstream::GenerationBackend;

#[derive(Clone)]
pub struct Gateway {
    backend: Arc<dyn GenerationBackend>,
}

impl Gateway {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Run one validated request against the backend. No retries: a
    /// failure is classified and returned immediately.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, ClientError> {
        let config = config_for_mode(request.mode);
        let started = Instant::now();

        match self.backend.generate(&request.prompt, &config).await {
            Ok(text) => {
                info!(
                    "[Gateway] mode={} generated {} chars in {}ms",
                    request.mode,
                    text.chars().count(),
                    started.elapsed().as_millis()
                );
                Ok(text)
            },
            Err(failure) => {
                let error = classify(&failure);
                warn!(
                    "[Gateway] mode={} upstream failed after {}ms: {} (http={:?}, status={:?}) -> {} ({})",
                    request.mode,
                    started.elapsed().as_millis(),
                    failure.message,
                    failure.http_status,
                    failure.status,
                    error.kind(),
                    error.http_status_code()
                );
                Err(error)
            },
        }
    }
}
