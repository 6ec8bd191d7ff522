//! # Configuration
//!
//! Layered configuration for the service:
//!
//! 1. Built-in defaults
//! 2. Optional JSON file (`--config`)
//! 3. Environment variables (after loading `.env` if present)
//! 4. Command-line flags, applied by the CLI
//!
//! The store mode follows from the spreadsheet id: set means Google Sheets,
//! unset or empty means the in-memory store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::sheets::{self, GoogleSheetsClient, ServiceAccountTokenSource};
use crate::store::{ClientStore, IdPolicy, MemoryStore, SheetStore, StoreResult};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

fn default_key_file() -> PathBuf {
    PathBuf::from("service-account-key.json")
}

fn default_api_base() -> String {
    sheets::DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    sheets::DEFAULT_TIMEOUT.as_secs()
}

/// Where client records live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Spreadsheet id; empty selects the in-memory store
    #[serde(default)]
    pub spreadsheet_id: Option<String>,

    /// Tab holding the client rows (default: "Sheet1")
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Service-account JSON key (default: "service-account-key.json")
    #[serde(default = "default_key_file")]
    pub key_file: PathBuf,

    /// Sheets API root, overridable for proxies and tests
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout for store calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub id_policy: IdPolicy,

    /// Re-read after every append to confirm it landed
    #[serde(default)]
    pub verify_writes: bool,

    /// Seed the in-memory store with one demo client
    #[serde(default)]
    pub seed_demo_client: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            sheet_name: default_sheet_name(),
            key_file: default_key_file(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            id_policy: IdPolicy::default(),
            verify_writes: false,
            seed_demo_client: false,
        }
    }
}

impl StoreConfig {
    /// The configured spreadsheet id, if it selects Sheets mode
    pub fn spreadsheet(&self) -> Option<&str> {
        self.spreadsheet_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Construct the store this configuration describes
    pub fn open(&self) -> StoreResult<Arc<dyn ClientStore>> {
        let Some(spreadsheet_id) = self.spreadsheet() else {
            let store = if self.seed_demo_client {
                MemoryStore::with_demo_client()
            } else {
                MemoryStore::new()
            };
            return Ok(Arc::new(store));
        };

        let http = sheets::http_client(Duration::from_secs(self.timeout_secs))?;
        let tokens = ServiceAccountTokenSource::from_file(&self.key_file, http.clone())?;
        tracing::info!(account = tokens.client_email(), "loaded service account key");

        let client = GoogleSheetsClient::new(http, &self.api_base, spreadsheet_id, Arc::new(tokens))?;
        let store = SheetStore::new(client, sheets::client_range(&self.sheet_name))
            .with_id_policy(self.id_policy)
            .with_verify_writes(self.verify_writes);
        tracing::info!(
            spreadsheet = store.transport().spreadsheet_id(),
            range = store.range(),
            id_policy = %store.id_policy(),
            "spreadsheet store configured"
        );

        Ok(Arc::new(store))
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn parse_bool(key: &'static str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}

impl AppConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Defaults or file, then `.env` and process environment on top
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!(path = %env_file.display(), "loaded .env");
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                reason: format!("'{}' is not a port number", port),
            })?;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(id) = lookup("SPREADSHEET_ID") {
            self.store.spreadsheet_id = Some(id);
        }
        if let Some(sheet) = lookup("SHEET_NAME") {
            if !sheet.trim().is_empty() {
                self.store.sheet_name = sheet;
            }
        }
        if let Some(key_file) = lookup("SERVICE_ACCOUNT_KEY_FILE") {
            self.store.key_file = PathBuf::from(key_file);
        }
        if let Some(base) = lookup("SHEETS_API_BASE") {
            self.store.api_base = base;
        }
        if let Some(policy) = lookup("ID_POLICY") {
            self.store.id_policy = policy
                .parse()
                .map_err(|reason| ConfigError::InvalidValue { key: "ID_POLICY", reason })?;
        }
        if let Some(verify) = lookup("VERIFY_WRITES") {
            self.store.verify_writes = parse_bool("VERIFY_WRITES", &verify)?;
        }
        if let Some(seed) = lookup("SEED_DEMO_CLIENT") {
            self.store.seed_demo_client = parse_bool("SEED_DEMO_CLIENT", &seed)?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.log_format = format
                .parse()
                .map_err(|reason| ConfigError::InvalidValue { key: "LOG_FORMAT", reason })?;
        }
        Ok(())
    }
}
