//! Environment-driven gateway configuration.
//!
//! The observed service hard-coded its region, retry count and per-call
//! timeout at client construction; here they are configuration with those
//! values as defaults. The resulting policy is applied once to the shared
//! SDK config and covers every store call uniformly — handlers never run
//! their own retry loops.

use crate::{NoteStoreError, Result};
use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region, SdkConfig};
use std::time::Duration;

/// Retries per store call when the environment doesn't say otherwise.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Per-attempt timeout when the environment doesn't say otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Immutable, process-wide gateway configuration.
///
/// Read once at startup; every handler shares the client built from it.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Name of the notes table.
    pub table_name: String,
    /// AWS region; falls back to the SDK's default provider chain when unset.
    pub region: Option<String>,
    /// Endpoint override, for DynamoDB Local and integration tests.
    pub endpoint_url: Option<String>,
    /// Retries per store call, on top of the initial attempt.
    pub max_retries: u32,
    /// Timeout applied to each individual attempt.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Creates a configuration for `table_name` with default policy.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            region: None,
            endpoint_url: None,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads configuration from the process environment.
    ///
    /// `NOTES_TABLE_NAME` is required. `NOTES_REGION`, `AWS_ENDPOINT_URL`,
    /// `NOTES_MAX_RETRIES` and `NOTES_TIMEOUT_SECS` are optional.
    ///
    /// # Errors
    ///
    /// [`NoteStoreError::Config`] if the table name is missing or a numeric
    /// variable fails to parse.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let table_name = var("NOTES_TABLE_NAME")
            .ok_or_else(|| NoteStoreError::Config("NOTES_TABLE_NAME is not set".to_string()))?;

        let mut config = Self::new(table_name);
        config.region = var("NOTES_REGION");
        config.endpoint_url = var("AWS_ENDPOINT_URL");

        if let Some(raw) = var("NOTES_MAX_RETRIES") {
            config.max_retries = raw.parse().map_err(|err| {
                NoteStoreError::Config(format!("invalid NOTES_MAX_RETRIES '{raw}': {err}"))
            })?;
        }
        if let Some(raw) = var("NOTES_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|err| {
                NoteStoreError::Config(format!("invalid NOTES_TIMEOUT_SECS '{raw}': {err}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Loads the shared AWS SDK config with this policy applied.
    pub async fn load_aws_config(&self) -> SdkConfig {
        // max_attempts counts the initial try.
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::standard().with_max_attempts(self.max_retries + 1))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_attempt_timeout(self.timeout)
                    .build(),
            );
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }
        loader.load().await
    }
}
