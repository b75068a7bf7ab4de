//! Published-sheet source: HTTP fetch plus tokenizing
//!
//! [`SheetSource`] is the seam between transport and engine, so tests
//! and alternative ingestion paths can inject row suppliers.

use std::time::Duration;

use async_trait::async_trait;
use pdm_common::sheet::{parse_rows, RawRow};
use pdm_common::{Error, Result};

const USER_AGENT: &str = concat!("pdm-api/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplier of raw sheet rows.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>>;
}

/// HTTP client bound to one published CSV export URL.
pub struct SheetClient {
    http: reqwest::Client,
    url: String,
}

impl SheetClient {
    pub fn new(url: impl Into<String>) -> Result<SheetClient> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| Error::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(SheetClient {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SheetSource for SheetClient {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>> {
        tracing::debug!(url = %self.url, "fetching sheet export");

        let response = self.http.get(&self.url).send().await.map_err(|e| {
            tracing::error!(url = %self.url, "sheet fetch failed: {}", e);
            Error::Fetch(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %self.url, status = %status, "sheet export answered with error status");
            return Err(Error::Fetch(format!(
                "sheet export answered HTTP {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        // A login or error page where the CSV export should be.
        if body.trim_start().starts_with('<') {
            return Err(Error::Sheet(
                "sheet URL answered HTML, not a CSV export".to_string(),
            ));
        }

        let rows = parse_rows(&body)?;
        tracing::info!(url = %self.url, rows = rows.len(), "sheet export fetched");
        Ok(rows)
    }
}
