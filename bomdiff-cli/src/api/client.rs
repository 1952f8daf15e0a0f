//! NetSuite REST client: SuiteQL queries and REST Records lookups

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::auth::OAuthSigner;
use crate::config::Credentials;
use crate::error::BomDiffError;

/// Fixed per-call ceiling; there is no retry on top of it
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SUITEQL_PATH: &str = "/services/rest/query/v1/suiteql";
const RECORD_PATH: &str = "/services/rest/record/v1";

/// One SuiteQL result row (column name -> value)
pub type Row = serde_json::Map<String, Value>;

/// Remote ERP operations the diff pipeline needs
#[async_trait]
pub trait ErpApi: Send + Sync {
    /// Run a SuiteQL query and return its rows (empty when nothing matches)
    async fn suiteql(&self, query: &str) -> Result<Vec<Row>>;

    /// Fetch one record with sub-resources expanded; `None` when it does not exist
    async fn get_record(&self, record_type: &str, id: i64) -> Result<Option<Value>>;
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    items: Vec<Row>,
}

/// Signed HTTP client against one NetSuite account
pub struct SuiteTalkClient {
    http: reqwest::Client,
    base_url: String,
    signer: OAuthSigner,
}

impl SuiteTalkClient {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: credentials.base_url().to_string(),
            signer: OAuthSigner::new(credentials),
        })
    }

    /// Load credentials from the environment and build a client
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Self::new(&credentials)
    }

    pub fn suiteql_url(&self) -> String {
        format!("{}{}", self.base_url, SUITEQL_PATH)
    }

    pub fn record_url(&self, record_type: &str, id: i64) -> String {
        format!("{}{}/{}/{}", self.base_url, RECORD_PATH, record_type, id)
    }
}

#[async_trait]
impl ErpApi for SuiteTalkClient {
    async fn suiteql(&self, query: &str) -> Result<Vec<Row>> {
        let url = self.suiteql_url();
        let auth = self.signer.authorization_header("POST", &url, &[])?;

        log::debug!("SuiteQL: {}", query.trim());

        let response = self
            .http
            .post(&url)
            .header("Authorization", auth)
            .header("Prefer", "transient")
            .json(&serde_json::json!({ "q": query }))
            .send()
            .await
            .context("Failed to send SuiteQL request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read SuiteQL response body")?;

        if !status.is_success() {
            log::warn!("SuiteQL HTTP {} for query: {}", status.as_u16(), query.trim());
            return Err(BomDiffError::api(status.as_u16(), "suiteql", &body, Some(query)).into());
        }

        let parsed: QueryResponse =
            serde_json::from_str(&body).context("Failed to parse SuiteQL response")?;
        log::debug!("SuiteQL returned {} rows", parsed.items.len());
        Ok(parsed.items)
    }

    async fn get_record(&self, record_type: &str, id: i64) -> Result<Option<Value>> {
        let url = self.record_url(record_type, id);
        let query = [("expandSubResources", "true")];
        let auth = self.signer.authorization_header("GET", &url, &query)?;

        let response = self
            .http
            .get(&url)
            .query(&query)
            .header("Authorization", auth)
            .header("Prefer", "transient")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {} {}", record_type, id))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::debug!("{} {} not found", record_type, id);
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} {} response body", record_type, id))?;

        if !status.is_success() {
            log::warn!(
                "REST Records HTTP {} for {} {}; check the role's access to this record and its subsidiary",
                status.as_u16(),
                record_type,
                id
            );
            let endpoint = format!("record/{}/{}", record_type, id);
            return Err(BomDiffError::api(status.as_u16(), endpoint, &body, None).into());
        }

        let record: Value = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse {} {} response", record_type, id))?;
        Ok(Some(record))
    }
}
