use crate::domain::model::Metric;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Autocomplete endpoint queried once per seed. Returns the ordered suggestion
/// list only; the pipeline prepends the seed itself at rank 0.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggestions(&self, seed: &str) -> Result<Vec<String>>;
}

/// Volume/competition endpoint queried once per batch of terms. Terms absent
/// from the response simply have no metric.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn metrics(&self, terms: &[String]) -> Result<Vec<Metric>>;
}
