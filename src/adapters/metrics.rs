use crate::adapters::signature::sign_request;
use crate::domain::model::{CompetitionLevel, Metric};
use crate::domain::ports::MetricsSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const KEYWORD_TOOL_PATH: &str = "/keywordstool";

/// Credentials for the signed metrics endpoint. Read once from the
/// environment at startup, never mutated.
#[derive(Debug, Clone)]
pub struct MetricsCredentials {
    pub api_key: String,
    pub secret_key: String,
    pub customer_id: String,
}

/// Client for the keyword metrics endpoint. Every request carries a
/// timestamp, API key, customer id and an HMAC signature over
/// `timestamp.method.uri` in its headers.
pub struct MetricsClient {
    client: Client,
    base_url: String,
    credentials: MetricsCredentials,
}

#[derive(Debug, Deserialize)]
struct KeywordToolResponse {
    #[serde(rename = "keywordList", default)]
    keyword_list: Vec<KeywordStats>,
}

/// One per-term record. The API reports tiny volumes as strings ("< 10"),
/// so the count fields are kept loose and read as 0 when non-numeric.
#[derive(Debug, Deserialize)]
struct KeywordStats {
    #[serde(rename = "relKeyword")]
    rel_keyword: String,
    #[serde(rename = "monthlyPcQcCnt", default)]
    monthly_pc: serde_json::Value,
    #[serde(rename = "monthlyMobileQcCnt", default)]
    monthly_mobile: serde_json::Value,
    #[serde(rename = "compIdx", default)]
    comp_idx: String,
}

impl KeywordStats {
    fn into_metric(self) -> Metric {
        let volume =
            self.monthly_pc.as_u64().unwrap_or(0) + self.monthly_mobile.as_u64().unwrap_or(0);
        Metric {
            term: self.rel_keyword,
            volume,
            competition: CompetitionLevel::from_label(&self.comp_idx),
        }
    }
}

impl MetricsClient {
    pub fn new(base_url: impl Into<String>, credentials: MetricsCredentials) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            credentials,
        }
    }
}

#[async_trait]
impl MetricsSource for MetricsClient {
    async fn metrics(&self, terms: &[String]) -> Result<Vec<Metric>> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        // The endpoint takes a comma-joined hint list with whitespace
        // stripped from each term.
        let hint_keywords = terms
            .iter()
            .map(|t| t.split_whitespace().collect::<String>())
            .collect::<Vec<_>>()
            .join(",");

        let timestamp = chrono::Utc::now().timestamp_millis().to_string();
        let signature = sign_request(
            &self.credentials.secret_key,
            &timestamp,
            "GET",
            KEYWORD_TOOL_PATH,
        );

        tracing::debug!("Fetching metrics for {} term(s)", terms.len());

        let response = self
            .client
            .get(format!("{}{}", self.base_url, KEYWORD_TOOL_PATH))
            .query(&[("hintKeywords", hint_keywords.as_str()), ("showDetail", "1")])
            .header("X-Timestamp", timestamp.as_str())
            .header("X-API-KEY", self.credentials.api_key.as_str())
            .header("X-Customer", self.credentials.customer_id.as_str())
            .header("X-Signature", signature.as_str())
            .send()
            .await?
            .error_for_status()?;

        let body: KeywordToolResponse = response.json().await?;
        Ok(body
            .keyword_list
            .into_iter()
            .map(KeywordStats::into_metric)
            .collect())
    }
}
