use async_trait::async_trait;
use url::Url;

use super::{ScheduleApi, ServiceError, ServiceReply};

/// HTTP client for the schedule service.
pub struct HttpScheduleService {
    client: reqwest::Client,
    base: Url,
}

impl HttpScheduleService {
    pub fn new(base_url: &str, client: reqwest::Client) -> Result<Self, ServiceError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = Url::parse(&normalized)?;

        Ok(Self { client, base })
    }
}

#[async_trait]
impl ScheduleApi for HttpScheduleService {
    async fn unblock(&self, schedule_id: &str, token: &str) -> Result<ServiceReply, ServiceError> {
        let url = self.base.join(&format!("schedules/{}/unblock", schedule_id))?;

        tracing::debug!("schedule unblock: {}", url);
        let res = self.client.post(url).bearer_auth(token).send().await?;

        ServiceReply::from_response(res).await
    }

    async fn slots_by_date(
        &self,
        date: &str,
        class_id: Option<&str>,
        token: &str,
    ) -> Result<ServiceReply, ServiceError> {
        let mut url = self.base.join("schedules/slots")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("date", date);
            if let Some(class_id) = class_id {
                query.append_pair("class_id", class_id);
            }
        }

        tracing::debug!("slot lookup: {}", url);
        let res = self.client.get(url).bearer_auth(token).send().await?;

        ServiceReply::from_response(res).await
    }
}
