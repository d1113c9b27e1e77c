use async_trait::async_trait;
use serde_json::Value;

pub mod class_service;
pub mod schedule_service;

pub use class_service::HttpClassService;
pub use schedule_service::HttpScheduleService;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    // Failure envelopes carry this text verbatim; transparent keeps the
    // transport error's own message
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("invalid service payload: {0}")]
    InvalidPayload(String),
    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// What a backend call resolves to when the transport succeeds: the status the
/// service reported plus its raw JSON payload.
#[derive(Debug, Clone)]
pub struct ServiceReply {
    pub status: u16,
    pub payload: Value,
}

impl ServiceReply {
    pub async fn from_response(res: reqwest::Response) -> Result<Self, ServiceError> {
        let status = res.status().as_u16();
        let body = res.text().await?;

        // Unblock responses may legitimately carry no body
        let payload = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).map_err(|e| ServiceError::InvalidPayload(e.to_string()))?
        };

        Ok(Self { status, payload })
    }
}

/// By-cycle class lookup on the class service.
#[async_trait]
pub trait ClassApi: Send + Sync {
    async fn class_by_cycle(&self, cycle_id: &str, token: &str)
        -> Result<ServiceReply, ServiceError>;
}

/// Schedule actions and slot availability on the schedule service.
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn unblock(&self, schedule_id: &str, token: &str) -> Result<ServiceReply, ServiceError>;

    async fn slots_by_date(
        &self,
        date: &str,
        class_id: Option<&str>,
        token: &str,
    ) -> Result<ServiceReply, ServiceError>;
}
