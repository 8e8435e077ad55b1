use crate::constants::{INGEST_PATH, QUERY_PATH};
use crate::errors::{RagError, RagResult};
use crate::models::{IngestRequest, IngestResponse, QueryRequest, QueryResponse};
use log::{debug, warn};
use reqwest::Client;

/// HTTP client for the retrieval backend. Both endpoints are JSON-in,
/// JSON-out; non-2xx bodies are plain-text detail.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Submits the full URL batch to the indexing endpoint in one request.
    pub async fn ingest(&self, urls: Vec<String>) -> RagResult<IngestResponse> {
        let endpoint = format!("{}{}", self.base_url, INGEST_PATH);
        debug!("POST {} with {} url(s)", endpoint, urls.len());

        let response = self
            .http
            .post(&endpoint)
            .json(&IngestRequest { urls })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let message = if detail.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                detail
            };
            warn!("Ingest failed: {}", message);
            return Err(RagError::backend_error(message));
        }

        Ok(response.json().await?)
    }

    /// Asks a question against the indexed content.
    pub async fn query(&self, request: &QueryRequest) -> RagResult<QueryResponse> {
        let endpoint = format!("{}{}", self.base_url, QUERY_PATH);
        debug!(
            "POST {} (history: {} turn(s), filter: {})",
            endpoint,
            request.chat_history.len(),
            request.sources_filter.as_ref().map_or(0, Vec::len)
        );

        let response = self.http.post(&endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let message = if detail.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                detail
            };
            warn!("Query failed: {}", message);
            return Err(RagError::backend_error(message));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOP_K;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn query_request(question: &str) -> QueryRequest {
        QueryRequest {
            query: question.to_string(),
            top_k: TOP_K,
            with_answer: true,
            chat_history: Vec::new(),
            sources_filter: None,
        }
    }

    #[tokio::test]
    async fn test_ingest_success_reports_inserted_count() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ingest"))
            .and(body_json(json!({ "urls": ["http://a.example"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "inserted": 3 })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let response = client
            .ingest(vec!["http://a.example".to_string()])
            .await
            .unwrap();

        assert_eq!(response.inserted, 3);
    }

    #[tokio::test]
    async fn test_ingest_missing_count_defaults_to_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ingest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let response = client
            .ingest(vec!["http://a.example".to_string()])
            .await
            .unwrap();

        assert_eq!(response.inserted, 0);
    }

    #[tokio::test]
    async fn test_ingest_surfaces_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ingest"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Ingest failed: no loader"))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let err = client
            .ingest(vec!["http://a.example".to_string()])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Ingest failed: no loader");
    }

    #[tokio::test]
    async fn test_ingest_empty_error_body_falls_back_to_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ingest"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let err = client
            .ingest(vec!["http://a.example".to_string()])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[tokio::test]
    async fn test_query_parses_answer_and_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "answer": "The docs say yes.",
                "results": [
                    { "metadata": { "source": "http://a.example/docs" } },
                    { "metadata": {} }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let response = client.query(&query_request("is it so?")).await.unwrap();

        assert_eq!(response.answer.as_deref(), Some("The docs say yes."));
        assert_eq!(response.results.len(), 2);
        assert_eq!(
            response.results[0].metadata.source.as_deref(),
            Some("http://a.example/docs")
        );
        assert!(response.results[1].metadata.source.is_none());
    }

    #[tokio::test]
    async fn test_query_omits_filter_when_none() {
        let mock_server = MockServer::start().await;

        // Exact body match: a request carrying a sources_filter key would not match.
        Mock::given(method("POST"))
            .and(path("/query"))
            .and(body_json(json!({
                "query": "what is x?",
                "top_k": 5,
                "with_answer": true,
                "chat_history": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "answer": "x is x",
                "results": []
            })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let response = client.query(&query_request("what is x?")).await.unwrap();

        assert_eq!(response.answer.as_deref(), Some("x is x"));
    }
}
