//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor, and the configuration it is built from.

use std::sync::Arc;

use docsieve_schema::SchemaError;

use crate::catalog::SchemaCatalog;

/// Log output format for the server binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Log output format.
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// - `PORT`: listen port, default 8080. Unparseable values fall back to
    ///   the default.
    /// - `LOG_FORMAT`: `json` for structured output, anything else for pretty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self { port, log_format }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_format: LogFormat::Pretty,
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<SchemaCatalog>,
}

impl AppState {
    /// State with the builtin schema catalog.
    pub fn new(config: AppConfig) -> Result<Self, SchemaError> {
        Ok(Self::with_catalog(config, SchemaCatalog::builtin()?))
    }

    /// State serving a caller-provided catalog.
    pub fn with_catalog(config: AppConfig, catalog: SchemaCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }
}
