//! HTTP client for the billing backend REST API.
//!
//! Implements the core's catalog and claim API traits over reqwest. The
//! backend speaks plain JSON with snake_case fields; non-success responses
//! may carry a `{"message": ...}` or `{"error": ...}` body that is surfaced
//! to the user.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use medbill_core::catalogs::{CatalogApiTrait, Patient, Provider, Service};
use medbill_core::claims::{Claim, ClaimApiTrait, ClaimItem, ClaimPayload, CreatedClaim};
use medbill_core::errors::{ApiError, Error, Result};

use super::config::ApiConfig;

#[derive(Debug, serde::Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the billing backend.
///
/// One instance may be shared across form sessions; it holds no per-draft
/// state.
///
/// # Example
///
/// ```ignore
/// let client = BillingApiClient::new(ApiConfig::new("http://localhost:5000/api"))?;
/// let patients = client.list_patients().await?;
/// ```
#[derive(Debug, Clone)]
pub struct BillingApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BillingApiClient {
    /// Creates a new client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[BillingApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.parse_response(response).await
    }

    /// Make a POST request with a JSON body and parse the response.
    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[BillingApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.parse_response(response).await
    }

    /// Make a PUT request with a JSON body, discarding any response body.
    async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[BillingApi] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.status_error(status.as_u16(), response).await.into());
        }
        Ok(())
    }

    /// Parse an HTTP response, handling error statuses.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(self.status_error(status.as_u16(), response).await.into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{} - {}", e, body)).into())
    }

    /// Build an ApiError from a non-success response, preferring the
    /// backend's own error message when the body carries one.
    async fn status_error(&self, status: u16, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<BackendErrorBody>(&body)
            .ok()
            .and_then(|err| err.message.or(err.error))
            .unwrap_or_else(|| body.chars().take(200).collect());
        ApiError::Status { status, message }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog endpoints
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CatalogApiTrait for BillingApiClient {
    async fn list_patients(&self) -> Result<Vec<Patient>> {
        self.get("/patients").await
    }

    async fn list_providers(&self) -> Result<Vec<Provider>> {
        self.get("/providers").await
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        self.get("/services").await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Claim endpoints
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ClaimApiTrait for BillingApiClient {
    async fn get_claim(&self, claim_id: i64) -> Result<Claim> {
        self.get(&format!("/claims/{}", claim_id)).await
    }

    async fn get_claim_items(&self, claim_id: i64) -> Result<Vec<ClaimItem>> {
        self.get(&format!("/claims/{}/items", claim_id)).await
    }

    async fn create_claim(&self, payload: &ClaimPayload) -> Result<i64> {
        let created: CreatedClaim = self.post("/claims", payload).await?;
        Ok(created.claim_id)
    }

    async fn update_claim(&self, claim_id: i64, payload: &ClaimPayload) -> Result<()> {
        self.put(&format!("/claims/{}", claim_id), payload).await
    }
}
