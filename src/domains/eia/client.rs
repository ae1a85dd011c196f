//! Request executor for the EIA v2 API.
//!
//! Serializes a [`QuerySpec`] into a single HTTP GET and normalizes the
//! outcome. One attempt per call, no retries; every failure mode comes
//! back as an [`EiaError`] value.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::error::EiaError;
use super::query::QuerySpec;

/// Base URL of the EIA v2 API.
pub const EIA_API_BASE: &str = "https://api.eia.gov/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the EIA v2 API.
///
/// The API key is injected at construction rather than read from the
/// environment per call, so tests can exercise the executor without
/// mutating process state. Invocations share nothing beyond this
/// immutable client and reqwest's own connection pool.
#[derive(Debug, Clone)]
pub struct EiaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl EiaClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, EIA_API_BASE)
    }

    /// Client pointed at an alternate base URL, used by the test suite.
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Execute one query and return the parsed JSON payload.
    ///
    /// A missing API key fails before any network activity. Non-2xx
    /// responses keep their raw body for diagnostics; a 2xx body that is
    /// not JSON does not.
    pub async fn execute(&self, query: &QuerySpec) -> Result<Value, EiaError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(EiaError::MissingCredential);
        };

        let url = self.url_for(query);

        let mut pairs: Vec<(String, String)> = vec![
            ("api_key".to_string(), api_key.to_string()),
            ("offset".to_string(), query.offset.to_string()),
            ("length".to_string(), query.length.to_string()),
        ];
        pairs.extend(query.query_pairs());

        debug!(%url, "querying EIA API");

        let response = self
            .http
            .get(&url)
            .query(&pairs)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| EiaError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "EIA API returned an error status");
            let body = response.text().await.unwrap_or_default();
            return Err(EiaError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| {
            if e.is_decode() {
                EiaError::MalformedResponse
            } else {
                EiaError::Transport(e.to_string())
            }
        })
    }

    /// Data queries target the `/data` sibling of the endpoint unless
    /// the path already ends there; metadata queries use the bare path.
    fn url_for(&self, query: &QuerySpec) -> String {
        if !query.metadata_only
            && !query.endpoint.is_empty()
            && !query.endpoint.ends_with("/data")
        {
            format!("{}/{}/data", self.base_url, query.endpoint)
        } else {
            format!("{}/{}", self.base_url, query.endpoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn data_query(endpoint: &str) -> QuerySpec {
        QuerySpec {
            endpoint: endpoint.to_string(),
            data_columns: vec!["value".to_string()],
            facets: Vec::new(),
            frequency: None,
            start: None,
            end: None,
            sort: Vec::new(),
            offset: 0,
            length: 100,
            metadata_only: false,
        }
    }

    fn metadata_query(endpoint: &str) -> QuerySpec {
        QuerySpec {
            metadata_only: true,
            length: 1,
            data_columns: Vec::new(),
            ..data_query(endpoint)
        }
    }

    /// Serve exactly one canned HTTP response, then close.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    #[test]
    fn data_url_appends_data_suffix() {
        let client = EiaClient::with_base_url(Some("k".into()), "https://api.eia.gov/v2");
        assert_eq!(
            client.url_for(&data_query("electricity/retail-sales")),
            "https://api.eia.gov/v2/electricity/retail-sales/data"
        );
    }

    #[test]
    fn data_url_does_not_double_data_suffix() {
        let client = EiaClient::with_base_url(Some("k".into()), "https://api.eia.gov/v2");
        assert_eq!(
            client.url_for(&data_query("electricity/retail-sales/data")),
            "https://api.eia.gov/v2/electricity/retail-sales/data"
        );
    }

    #[test]
    fn metadata_url_uses_bare_path() {
        let client = EiaClient::with_base_url(Some("k".into()), "https://api.eia.gov/v2");
        assert_eq!(
            client.url_for(&metadata_query("electricity")),
            "https://api.eia.gov/v2/electricity"
        );
        assert_eq!(client.url_for(&metadata_query("")), "https://api.eia.gov/v2/");
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_call() {
        // The base URL is unroutable; reaching it would fail loudly with
        // a transport error instead of the credential error we expect.
        let client = EiaClient::with_base_url(None, "http://192.0.2.1:1");
        let err = client.execute(&data_query("electricity/retail-sales")).await.unwrap_err();
        assert!(matches!(err, EiaError::MissingCredential));
    }

    #[tokio::test]
    async fn success_returns_parsed_payload() {
        let base = one_shot_server(
            "200 OK",
            r#"{"response": {"total": 1, "data": [{"period": "2023", "value": 42}]}}"#,
        )
        .await;
        let client = EiaClient::with_base_url(Some("k".into()), base);
        let payload = client.execute(&data_query("natural-gas/stor/sum")).await.unwrap();
        assert_eq!(payload["response"]["total"], 1);
        assert_eq!(payload["response"]["data"][0]["value"], 42);
    }

    #[tokio::test]
    async fn upstream_error_keeps_status_and_body() {
        let base = one_shot_server("404 Not Found", "no such route").await;
        let client = EiaClient::with_base_url(Some("k".into()), base);
        let err = client.execute(&data_query("electricity/nope")).await.unwrap_err();
        match err {
            EiaError::UpstreamStatus { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such route");
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_reported_without_detail() {
        let base = one_shot_server("200 OK", "<html>maintenance</html>").await;
        let client = EiaClient::with_base_url(Some("k".into()), base);
        let err = client.execute(&data_query("electricity/retail-sales")).await.unwrap_err();
        assert!(matches!(err, EiaError::MalformedResponse));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind to grab a free port, then drop the listener so nothing
        // answers there.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = EiaClient::with_base_url(Some("k".into()), format!("http://{addr}"));
        let err = client.execute(&data_query("electricity/retail-sales")).await.unwrap_err();
        assert!(matches!(err, EiaError::Transport(_)));
    }
}
