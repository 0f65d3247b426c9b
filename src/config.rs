//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export N8N_WEBHOOK_URL="https://n8n.example.com/webhook/summarize"
//! export PORT="10000"
//! ```
//!
//! ## Required Variables
//!
//! - `N8N_WEBHOOK_URL` (or `DISPATCH_URL`) - Automation workflow webhook
//!
//! ## Optional Variables
//!
//! - `PORT` - Listening port (default: `10000`)
//! - `LISTEN` - Full bind address, overrides `PORT` (default: `0.0.0.0:$PORT`)
//! - `DISPATCH_TIMEOUT_SECS` - Per-attempt webhook timeout (default: 30, max: 120)
//! - `DISPATCH_CONNECT_RETRIES` - Retries when the engine cannot be connected to (default: 0, max: 5)
//! - `DISPATCH_RETRY_BASE_MS` - Base backoff between connect retries (default: 200)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins or `*` (default: `*`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RAILWAY_ENVIRONMENT` / `APP_ENV` - Deployment label, logged only

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::dispatch::DispatchConfig;
use crate::utils::article_url::parse_article_url;
use crate::utils::mask::mask_url;

const DEFAULT_PORT: u16 = 10_000;
const MAX_DISPATCH_TIMEOUT_SECS: u64 = 120;
const MAX_CONNECT_RETRIES: usize = 5;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on a single webhook attempt, in seconds.
    pub dispatch_timeout_secs: u64,
    /// Extra attempts when the TCP connection to the engine fails.
    /// Nothing has been sent in that case, so a retry cannot duplicate work.
    pub dispatch_connect_retries: usize,
    pub dispatch_retry_base_ms: u64,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub environment: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook URL is missing or `PORT` is not a number.
    pub fn from_env() -> Result<Self> {
        let webhook_url =
            Self::load_webhook_url().context("Failed to load dispatch configuration")?;

        let listen_addr = Self::load_listen_addr()?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dispatch_timeout_secs = env::var("DISPATCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let dispatch_connect_retries = env::var("DISPATCH_CONNECT_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let dispatch_retry_base_ms = env::var("DISPATCH_RETRY_BASE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(200);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        let environment = env::var("RAILWAY_ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .ok()
            .filter(|v| !v.is_empty());

        Ok(Self {
            webhook_url,
            listen_addr,
            log_level,
            log_format,
            dispatch_timeout_secs,
            dispatch_connect_retries,
            dispatch_retry_base_ms,
            cors_allowed_origins,
            environment,
        })
    }

    /// Loads the webhook URL.
    ///
    /// Priority:
    /// 1. `N8N_WEBHOOK_URL`
    /// 2. `DISPATCH_URL`
    fn load_webhook_url() -> Result<String> {
        env::var("N8N_WEBHOOK_URL")
            .or_else(|_| env::var("DISPATCH_URL"))
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_string())
            .context("N8N_WEBHOOK_URL must be set")
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN`
    /// 2. `0.0.0.0:$PORT`
    fn load_listen_addr() -> Result<String> {
        if let Ok(listen) = env::var("LISTEN") {
            return Ok(listen);
        }

        let port = match env::var("PORT") {
            Ok(p) => p
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{p}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(format!("0.0.0.0:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the webhook URL is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - dispatch timeout or retry settings are out of range
    pub fn validate(&self) -> Result<()> {
        parse_article_url(&self.webhook_url).with_context(|| {
            format!(
                "N8N_WEBHOOK_URL must be an absolute http(s) URL, got '{}'",
                mask_url(&self.webhook_url)
            )
        })?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.dispatch_timeout_secs == 0 || self.dispatch_timeout_secs > MAX_DISPATCH_TIMEOUT_SECS
        {
            anyhow::bail!(
                "DISPATCH_TIMEOUT_SECS must be between 1 and {}, got {}",
                MAX_DISPATCH_TIMEOUT_SECS,
                self.dispatch_timeout_secs
            );
        }

        if self.dispatch_connect_retries > MAX_CONNECT_RETRIES {
            anyhow::bail!(
                "DISPATCH_CONNECT_RETRIES must be at most {}, got {}",
                MAX_CONNECT_RETRIES,
                self.dispatch_connect_retries
            );
        }

        if self.dispatch_connect_retries > 0 && self.dispatch_retry_base_ms == 0 {
            anyhow::bail!("DISPATCH_RETRY_BASE_MS must be greater than 0 when retries are enabled");
        }

        Ok(())
    }

    /// Builds the webhook client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook URL does not parse.
    pub fn dispatch_config(&self) -> Result<DispatchConfig> {
        let endpoint = parse_article_url(&self.webhook_url)
            .with_context(|| format!("Invalid webhook URL '{}'", mask_url(&self.webhook_url)))?;

        let mut config =
            DispatchConfig::new(endpoint, Duration::from_secs(self.dispatch_timeout_secs));
        config.connect_retries = self.dispatch_connect_retries;
        config.retry_base_delay = Duration::from_millis(self.dispatch_retry_base_ms);

        Ok(config)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Environment: {}",
            self.environment.as_deref().unwrap_or("unset")
        );
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Webhook: {}", mask_url(&self.webhook_url));
        tracing::info!("  Dispatch timeout: {}s", self.dispatch_timeout_secs);
        tracing::info!("  Connect retries: {}", self.dispatch_connect_retries);

        if self.cors_allowed_origins.is_empty() {
            tracing::info!("  CORS origins: any");
        } else {
            tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated origin list. `*` anywhere means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
