use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{AccessLevel, Session};
use crate::services::{ClassApi, ScheduleApi, ServiceError, ServiceReply};
use crate::session::MemoryFlags;
use crate::state::AppState;

/// Canned backend for handler tests: either a fixed reply or a failure.
pub struct StubService {
    reply: Option<(u16, Value)>,
}

impl StubService {
    pub fn replying(status: u16, payload: Value) -> Self {
        Self {
            reply: Some((status, payload)),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }

    fn respond(&self) -> Result<ServiceReply, ServiceError> {
        match &self.reply {
            Some((status, payload)) => Ok(ServiceReply {
                status: *status,
                payload: payload.clone(),
            }),
            None => Err(ServiceError::InvalidPayload(
                "stubbed backend failure".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ClassApi for StubService {
    async fn class_by_cycle(
        &self,
        _cycle_id: &str,
        _token: &str,
    ) -> Result<ServiceReply, ServiceError> {
        self.respond()
    }
}

#[async_trait]
impl ScheduleApi for StubService {
    async fn unblock(&self, _id: &str, _token: &str) -> Result<ServiceReply, ServiceError> {
        self.respond()
    }

    async fn slots_by_date(
        &self,
        _date: &str,
        _class_id: Option<&str>,
        _token: &str,
    ) -> Result<ServiceReply, ServiceError> {
        self.respond()
    }
}

pub fn state_with(classes: StubService, schedule: StubService) -> AppState {
    AppState {
        classes: Arc::new(classes),
        schedule: Arc::new(schedule),
        flags: Arc::new(MemoryFlags::new()),
    }
}

fn session(roles: &[&str]) -> Session {
    let roles: Vec<String> = roles.iter().map(|s| s.to_string()).collect();
    let access = AccessLevel::from_roles(&roles);

    Session {
        user_id: Uuid::new_v4(),
        name: "Teste".to_string(),
        roles,
        access,
        token: "test-token".to_string(),
    }
}

pub fn participant_session() -> Session {
    session(&["participant"])
}

pub fn admin_session() -> Session {
    session(&["facilitator"])
}
