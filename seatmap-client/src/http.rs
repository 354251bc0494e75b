//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult, TableApi};
use async_trait::async_trait;
use reqwest::Client;
use shared::client::{ErrorBody, ReservationRequest, TableListResponse};
use shared::models::FloorTable;

/// HTTP client for making network requests to the table service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Check the status and map non-2xx responses to [`ClientError::Rejected`],
    /// parsing the optional `{ "detail": ... }` body.
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.detail);
        tracing::warn!(%status, ?detail, "table service rejected request");
        Err(ClientError::Rejected { status, detail })
    }
}

#[async_trait]
impl TableApi for HttpClient {
    /// `GET /tables`
    async fn list_tables(&self) -> ClientResult<Vec<FloorTable>> {
        let response = self.client.get(self.url("tables")).send().await?;
        let response = Self::check_status(response).await?;
        let list: TableListResponse = response.json().await?;
        Ok(list.items)
    }

    /// `POST /seed` — no request body, response body ignored
    async fn seed(&self) -> ClientResult<()> {
        let response = self.client.post(self.url("seed")).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// `POST /reserve`
    async fn reserve(&self, request: &ReservationRequest) -> ClientResult<()> {
        let response = self
            .client
            .post(self.url("reserve"))
            .json(request)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
