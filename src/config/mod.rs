use crate::adapters::metrics::MetricsCredentials;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "keyword-pulse")]
#[command(about = "Aggregate keyword suggestions and rank them by search metrics")]
pub struct CliConfig {
    /// Seed keywords, comma or newline separated (at most 3 are used)
    pub seeds: String,

    #[arg(long, default_value = "https://suggestqueries.google.com/complete/search")]
    pub suggest_endpoint: String,

    #[arg(long, default_value = "https://api.naver.com")]
    pub metrics_endpoint: String,

    #[arg(long, env = "NAVER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "NAVER_SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,

    #[arg(long, env = "NAVER_CUSTOMER_ID")]
    pub customer_id: String,

    /// Language hint for the suggestion source
    #[arg(long, default_value = "ko")]
    pub lang: String,

    /// Region hint for the suggestion source
    #[arg(long, default_value = "kr")]
    pub region: String,

    /// Minimum interval between external calls, in milliseconds
    #[arg(long, default_value = "100")]
    pub call_interval_ms: u64,

    /// Terms per metrics request
    #[arg(long, default_value = "5")]
    pub chunk_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn credentials(&self) -> MetricsCredentials {
        MetricsCredentials {
            api_key: self.api_key.clone(),
            secret_key: self.secret_key.clone(),
            customer_id: self.customer_id.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("suggest_endpoint", &self.suggest_endpoint)?;
        validate_url("metrics_endpoint", &self.metrics_endpoint)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("secret_key", &self.secret_key)?;
        validate_non_empty_string("customer_id", &self.customer_id)?;
        validate_positive_number("chunk_size", self.chunk_size, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            seeds: "rust".to_string(),
            suggest_endpoint: "https://example.com/complete/search".to_string(),
            metrics_endpoint: "https://example.com".to_string(),
            api_key: "key".to_string(),
            secret_key: "secret".to_string(),
            customer_id: "1".to_string(),
            lang: "ko".to_string(),
            region: "kr".to_string(),
            call_interval_ms: 100,
            chunk_size: 5,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let mut c = config();
        c.metrics_endpoint = "not a url".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_blank_credentials_rejected() {
        let mut c = config();
        c.secret_key = " ".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut c = config();
        c.chunk_size = 0;
        assert!(c.validate().is_err());
    }
}
