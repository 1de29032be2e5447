use crate::domain::ports::SuggestionSource;
use crate::utils::error::{AnalyzeError, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Client for the autocomplete suggestion endpoint. The response body is a
/// positional JSON array whose second element is the ordered suggestion list:
/// `["<query>", ["s1", "s2", ...], ...]`.
pub struct SuggestClient {
    client: Client,
    endpoint: String,
    lang: String,
    region: String,
}

impl SuggestClient {
    pub fn new(endpoint: impl Into<String>, lang: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            lang: lang.into(),
            region: region.into(),
        }
    }
}

#[async_trait]
impl SuggestionSource for SuggestClient {
    async fn suggestions(&self, seed: &str) -> Result<Vec<String>> {
        tracing::debug!("Fetching suggestions for '{}' from {}", seed, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "chrome"),
                ("q", seed),
                ("hl", self.lang.as_str()),
                ("gl", self.region.as_str()),
            ])
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;

        let list = body
            .get(1)
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| AnalyzeError::MalformedResponse {
                message: "suggestion response has no list at position 1".to_string(),
            })?;

        Ok(list
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_parses_positional_suggestion_list() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/complete/search")
                .query_param("client", "chrome")
                .query_param("q", "rust")
                .query_param("hl", "ko")
                .query_param("gl", "kr");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    "rust",
                    ["rust lang", "rust book"],
                    ["", ""],
                    { "google:suggesttype": ["QUERY", "QUERY"] }
                ]));
        });

        let client = SuggestClient::new(server.url("/complete/search"), "ko", "kr");
        let suggestions = client.suggestions("rust").await.unwrap();

        mock.assert();
        assert_eq!(suggestions, vec!["rust lang", "rust book"]);
    }

    #[tokio::test]
    async fn test_non_2xx_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/complete/search");
            then.status(503);
        });

        let client = SuggestClient::new(server.url("/complete/search"), "ko", "kr");
        assert!(client.suggestions("rust").await.is_err());
    }

    #[tokio::test]
    async fn test_body_without_list_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/complete/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "unexpected": true }));
        });

        let client = SuggestClient::new(server.url("/complete/search"), "ko", "kr");
        let err = client.suggestions("rust").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedResponse { .. }));
    }
}
