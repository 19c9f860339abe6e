// Configuration loading - file-backed app settings and environment secrets
use crate::domain::collection::Collection;
use crate::error::{ApiError, Result};
use serde::Deserialize;

// Candidate environment variables per setting, in resolution order. Older
// deployments used the generic NOTION_DATABASE_ID for the users table, so it
// stays as a fallback.
const INTEGRATION_TOKEN_KEYS: &[&str] = &["NOTION_INTEGRATION_SECRET"];
const USERS_DATABASE_KEYS: &[&str] = &["NOTION_USERS_DATABASE_ID", "NOTION_DATABASE_ID"];
const SERVICES_DATABASE_KEYS: &[&str] = &["NOTION_SERVICES_DATABASE_ID"];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub notion: NotionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotionConfig {
    /// Remote API host; overridable so tests can point at a local stub.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Value sent in the Notion-Version protocol header.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Bound on each remote call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_bind() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_api_host() -> String {
    "https://api.notion.com".to_string()
}

fn default_api_version() -> String {
    "2022-06-28".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Load application settings from an optional config file with
/// DASHBOARD_-prefixed environment overrides (e.g. DASHBOARD_SERVER__BIND).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Secrets and database identifiers resolved from the process environment.
/// Each setting has an ordered candidate list; the first present, non-empty
/// value wins.
#[derive(Clone)]
pub struct EnvSettings {
    source: config::Config,
}

impl EnvSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let source = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;
        Ok(Self { source })
    }

    /// Build settings from explicit key/value pairs, bypassing the process
    /// environment.
    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut builder = config::Config::builder();
        for (key, value) in pairs {
            builder = builder
                .set_override(key.to_lowercase(), *value)
                .expect("valid override");
        }
        Self {
            source: builder.build().expect("valid test settings"),
        }
    }

    /// Bearer credential for the remote API. Never logged.
    pub fn integration_token(&self) -> Result<String> {
        self.first_present(INTEGRATION_TOKEN_KEYS)
    }

    pub fn database_id(&self, collection: Collection) -> Result<String> {
        let candidates = match collection {
            Collection::Users => USERS_DATABASE_KEYS,
            Collection::Services => SERVICES_DATABASE_KEYS,
        };
        self.first_present(candidates)
    }

    fn first_present(&self, candidates: &[&str]) -> Result<String> {
        for key in candidates {
            // Environment sources normalize keys to lowercase
            if let Ok(value) = self.source.get_string(&key.to_lowercase()) {
                if !value.is_empty() {
                    return Ok(value);
                }
            }
        }
        Err(ApiError::missing_setting(candidates))
    }
}
