// Record service - Use case for fetching and flattening collections
use crate::application::page_repository::{DatabaseSummary, PageRepository};
use crate::domain::collection::Collection;
use crate::domain::record::{Service, User};
use crate::error::Result;
use crate::infrastructure::config::EnvSettings;
use crate::infrastructure::page_mapper;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct RecordService {
    repository: Arc<dyn PageRepository>,
    settings: EnvSettings,
}

/// Both collections, for the combined dashboard view.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub users: Vec<User>,
    pub services: Vec<Service>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn PageRepository>, settings: EnvSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        let database_id = self.settings.database_id(Collection::Users)?;
        let results = self.repository.query_pages(&database_id).await?;
        tracing::debug!("fetched {} pages from the users database", results.len());
        Ok(page_mapper::map_users(&results))
    }

    pub async fn fetch_services(&self) -> Result<Vec<Service>> {
        let database_id = self.settings.database_id(Collection::Services)?;
        let results = self.repository.query_pages(&database_id).await?;
        tracing::debug!("fetched {} pages from the services database", results.len());
        Ok(page_mapper::map_services(&results))
    }

    /// Fetch both collections concurrently. The two queries are independent;
    /// either failure aborts the combined view.
    pub async fn fetch_dashboard(&self) -> Result<DashboardData> {
        let (users, services) = tokio::join!(self.fetch_users(), self.fetch_services());
        Ok(DashboardData {
            users: users?,
            services: services?,
        })
    }

    /// Resolve the users database and retrieve its metadata, verifying that
    /// credentials and configuration line up.
    pub async fn check_connection(&self) -> Result<DatabaseSummary> {
        let database_id = self.settings.database_id(Collection::Users)?;
        self.repository.retrieve_database(&database_id).await
    }
}
