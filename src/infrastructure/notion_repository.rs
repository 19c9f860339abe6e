// Notion repository implementation
use crate::application::page_repository::{DatabaseSummary, PageRepository};
use crate::error::{ApiError, Result};
use crate::infrastructure::config::NotionConfig;
use crate::infrastructure::notion_page::RichTextFragment;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct NotionRepository {
    host: String,
    token: String,
    version: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default)]
    next_cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct DatabaseResponse {
    id: String,
    #[serde(default)]
    title: Vec<RichTextFragment>,
    created_time: String,
    last_edited_time: String,
}

impl NotionRepository {
    pub fn new(config: &NotionConfig, token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            host: config.api_host.trim_end_matches('/').to_string(),
            token,
            version: config.api_version.clone(),
            client,
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::RemoteService {
            status,
            message: upstream_message(&body),
        })
    }
}

/// Pull the human-readable message out of an upstream error body, falling
/// back to the raw text.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl PageRepository for NotionRepository {
    async fn query_pages(&self, database_id: &str) -> Result<Vec<Value>> {
        let url = format!("{}/v1/databases/{}/query", self.host, database_id);

        // Empty body: no filter or sort, default-ordered first page
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let data = response.json::<QueryResponse>().await?;

        if data.has_more {
            tracing::warn!(
                "database {} has more results than one page; truncating at cursor {:?}",
                database_id,
                data.next_cursor
            );
        }

        Ok(data.results)
    }

    async fn retrieve_database(&self, database_id: &str) -> Result<DatabaseSummary> {
        let url = format!("{}/v1/databases/{}", self.host, database_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let data = response.json::<DatabaseResponse>().await?;

        Ok(DatabaseSummary {
            id: data.id,
            title: data
                .title
                .first()
                .map(|t| t.plain_text.clone())
                .unwrap_or_else(|| "Untitled".to_string()),
            created_time: data.created_time,
            last_edited_time: data.last_edited_time,
        })
    }
}
