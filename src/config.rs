use std::time::Duration;

use crate::source::DEFAULT_BASE_URL;

pub const DEFAULT_TABLE_NAME: &str = "tcovid19";

/// Upper bound on each table lifecycle wait.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(300);

/// Upper bound on each report download.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Fallback when neither the environment nor the AWS profile names a region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Settings for one pipeline run. Built once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub table_name: String,
    pub source_base_url: String,
    pub wait_timeout: Duration,
    pub fetch_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            source_base_url: DEFAULT_BASE_URL.to_string(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Resolves AWS credentials and region for the store client.
pub async fn load_sdk_config() -> aws_config::SdkConfig {
    let region = aws_config::meta::region::RegionProviderChain::default_provider()
        .or_else(DEFAULT_REGION);
    aws_config::from_env().region(region).load().await
}
