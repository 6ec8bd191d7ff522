//! # Sheets REST Client
//!
//! Minimal Google Sheets v4 `values` client: read a range, append rows to a
//! range. Implements [`SheetTransport`] for the spreadsheet store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::auth::TokenSource;
use crate::store::{SheetTransport, StoreError, StoreResult};

/// Production API root
pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client used for both token exchange and Sheets calls
pub fn http_client(timeout: Duration) -> StoreResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| StoreError::transport(format!("failed to create HTTP client: {}", e)))
}

/// `ValueRange` as returned by `values.get`. Google omits `values` for an
/// empty range.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
struct AppendBody {
    values: Vec<Vec<Value>>,
}

/// Google Sheets client bound to one spreadsheet
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    tokens: Arc<dyn TokenSource>,
}

impl GoogleSheetsClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        spreadsheet_id: impl Into<String>,
        tokens: Arc<dyn TokenSource>,
    ) -> StoreResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::transport(format!("invalid API base '{}': {}", base_url, e)))?;

        Ok(Self {
            http,
            base_url,
            spreadsheet_id: spreadsheet_id.into(),
            tokens,
        })
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}{suffix}`
    fn values_url(&self, range: &str, suffix: &str) -> StoreResult<Url> {
        let last = format!("{}{}", range, suffix);
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::transport("API base cannot carry a path"))?
            .pop_if_empty()
            .extend(&[
                "v4",
                "spreadsheets",
                self.spreadsheet_id.as_str(),
                "values",
                last.as_str(),
            ]);
        Ok(url)
    }

    /// Turn a non-success response into a store error carrying the body
    async fn check(response: reqwest::Response) -> StoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SheetTransport for GoogleSheetsClient {
    async fn read_rows(&self, range: &str) -> StoreResult<Vec<Vec<Value>>> {
        let url = self.values_url(range, "")?;
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let body: ValueRange = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::decode(e.to_string()))?;

        tracing::debug!(range, rows = body.values.len(), "read sheet range");
        Ok(body.values)
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<Value>>) -> StoreResult<()> {
        let mut url = self.values_url(range, ":append")?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&AppendBody { values: rows })
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }
}
