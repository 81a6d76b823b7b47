//! Collaborator contract of the modal and its HTTP implementation.
//!
//! The modal only distinguishes "succeeded" from "did not succeed"; the
//! error variants exist for logging and tests.
//!
//! The platform reports some failures as a `2xx` response whose body is
//! `{ "failed": true, "message": "..." }`. Those are mapped to
//! [`CardTenantApiError::Failed`].

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use ustr::Ustr;

use super::query::{CardTenantQuery, TenantLookupQuery};
use super::types::{NewCardTenant, Page, RemovableTenant, TenantOption, TenantRow};
use crate::BusinessConfig;

#[derive(Debug, Error)]
pub enum CardTenantApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request rejected: {0}")]
    Failed(String),
}

/// A typed API result.
pub type ApiResult<T> = Result<T, CardTenantApiError>;

/// Operations the host application provides to the modal.
#[async_trait]
pub trait CardTenantApi: Send + Sync {
    /// Tenants already assigned to `query.card_id`.
    async fn fetch_assigned_tenants(&self, query: &CardTenantQuery) -> ApiResult<Page<TenantRow>>;

    async fn remove_assigned_tenants(&self, rows: &[RemovableTenant]) -> ApiResult<()>;

    async fn save_assigned_tenants(&self, rows: &[NewCardTenant]) -> ApiResult<()>;

    /// Candidate tenants for the picker.
    async fn lookup_tenants(&self, query: &TenantLookupQuery) -> ApiResult<Page<TenantOption>>;
}

#[derive(Deserialize)]
struct FailureBody {
    #[serde(default)]
    failed: bool,
    #[serde(default)]
    message: Option<String>,
}

fn failure_in(body: &[u8]) -> Option<CardTenantApiError> {
    let failure: FailureBody = serde_json::from_slice(body).ok()?;
    failure.failed.then(|| {
        CardTenantApiError::Failed(failure.message.unwrap_or_else(|| "unknown error".to_owned()))
    })
}

async fn read_body(response: reqwest::Response) -> ApiResult<Vec<u8>> {
    let status = response.status();
    if !status.is_success() {
        return Err(CardTenantApiError::Status(status.as_u16()));
    }
    let body = response.bytes().await?.to_vec();
    match failure_in(&body) {
        Some(err) => Err(err),
        None => Ok(body),
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let body = read_body(response).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// `CardTenantApi` backed by the platform's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpCardTenantApi {
    client: reqwest::Client,
    api_url: Ustr,
}

impl HttpCardTenantApi {
    pub fn new(config: &BusinessConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &BusinessConfig) -> Self {
        Self {
            client,
            api_url: config.api_url(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }
}

#[async_trait]
impl CardTenantApi for HttpCardTenantApi {
    /// GET `/v1/dashboard-cards/{cardId}/tenants`
    async fn fetch_assigned_tenants(&self, query: &CardTenantQuery) -> ApiResult<Page<TenantRow>> {
        let url = self.url(&format!("/v1/dashboard-cards/{}/tenants", query.card_id));
        debug!("GET {url} {:?}", query.to_query_pairs());

        let response = self
            .client
            .get(&url)
            .query(&query.to_query_pairs())
            .send()
            .await?;
        read_json(response).await
    }

    /// DELETE `/v1/dashboard-cards/tenants` with the rows as a JSON array.
    async fn remove_assigned_tenants(&self, rows: &[RemovableTenant]) -> ApiResult<()> {
        let url = self.url("/v1/dashboard-cards/tenants");
        debug!("DELETE {url} ({} rows)", rows.len());

        let response = self.client.delete(&url).json(rows).send().await?;
        read_body(response).await.map(drop)
    }

    /// POST `/v1/dashboard-cards/tenants` with the rows as a JSON array.
    async fn save_assigned_tenants(&self, rows: &[NewCardTenant]) -> ApiResult<()> {
        let url = self.url("/v1/dashboard-cards/tenants");
        debug!("POST {url} ({} rows)", rows.len());

        let response = self.client.post(&url).json(rows).send().await?;
        read_body(response).await.map(drop)
    }

    /// GET `/v1/lovs/data?lovCode=...`
    async fn lookup_tenants(&self, query: &TenantLookupQuery) -> ApiResult<Page<TenantOption>> {
        let url = self.url("/v1/lovs/data");
        debug!("GET {url} {:?}", query.to_query_pairs());

        let response = self
            .client
            .get(&url)
            .query(&query.to_query_pairs())
            .send()
            .await?;
        read_json(response).await
    }
}
