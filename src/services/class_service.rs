use async_trait::async_trait;
use url::Url;

use super::{ClassApi, ServiceError, ServiceReply};

/// HTTP client for the class service.
pub struct HttpClassService {
    client: reqwest::Client,
    base: Url,
}

impl HttpClassService {
    pub fn new(base_url: &str, client: reqwest::Client) -> Result<Self, ServiceError> {
        // A trailing slash keeps Url::join from eating the last path segment
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
impl ClassApi for HttpClassService {
    async fn class_by_cycle(
        &self,
        cycle_id: &str,
        token: &str,
    ) -> Result<ServiceReply, ServiceError> {
        let url = self.base.join(&format!("classes/by-cycle/{}", cycle_id))?;

        tracing::debug!("class service lookup: {}", url);
        let res = self.client.get(url).bearer_auth(token).send().await?;

        ServiceReply::from_response(res).await
    }
}
