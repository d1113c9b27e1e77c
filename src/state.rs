use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ClassApi, HttpClassService, HttpScheduleService, ScheduleApi, ServiceError};
use crate::session::{FlagStore, MemoryFlags};

/// Shared handler context: backend clients behind their trait seams plus the
/// session flag store.
#[derive(Clone)]
pub struct AppState {
    pub classes: Arc<dyn ClassApi>,
    pub schedule: Arc<dyn ScheduleApi>,
    pub flags: Arc<dyn FlagStore>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::new();

        Ok(Self {
            classes: Arc::new(HttpClassService::new(
                &config.services.class_service_url,
                client.clone(),
            )?),
            schedule: Arc::new(HttpScheduleService::new(
                &config.services.schedule_service_url,
                client,
            )?),
            flags: Arc::new(MemoryFlags::new()),
        })
    }
}
