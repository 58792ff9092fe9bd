use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use flightmock_sample::WireRecord;
use thiserror::Error;

use crate::source::{BatchPolicy, SampleSource};

/// Request-scoped handle to the shared [`SampleSource`].
#[derive(Clone, Debug)]
pub struct SampleContext {
    source: SampleSource,
}

impl SampleContext {
    pub fn source(&self) -> &SampleSource {
        &self.source
    }

    pub fn policy(&self) -> &BatchPolicy {
        self.source.policy()
    }

    /// Generates the batch for this request.
    pub fn batch(&self) -> Vec<WireRecord> {
        self.source.batch()
    }
}

/// Errors emitted when a handler requests [`SampleContext`] but extensions were not set up.
#[derive(Debug, Error)]
pub enum SampleContextRejection {
    #[error("sample source missing from request extensions")]
    MissingSampleSource,
}

impl IntoResponse for SampleContextRejection {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let message = self.to_string();
        (status, message).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SampleContext
where
    S: Send + Sync,
{
    type Rejection = SampleContextRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let source = parts
            .extensions
            .get::<SampleSource>()
            .cloned()
            .ok_or(SampleContextRejection::MissingSampleSource)?;

        Ok(Self { source })
    }
}
