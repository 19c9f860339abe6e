// Repository trait for remote document database access
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Summary of a remote database, as reported by the metadata endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseSummary {
    pub id: String,
    pub title: String,
    pub created_time: String,
    pub last_edited_time: String,
}

#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Query a database and return the raw page objects of the first result
    /// page. Continuation cursors are not followed: collections larger than
    /// the remote default page size come back truncated.
    async fn query_pages(&self, database_id: &str) -> Result<Vec<Value>>;

    /// Retrieve database metadata, used by the connection check.
    async fn retrieve_database(&self, database_id: &str) -> Result<DatabaseSummary>;
}
