//! HTTP client for the analysis backend.
//!
//! One `reqwest::Client` shared by every screen; each call is a single-shot
//! request with a fixed timeout. Failures collapse into [`ApiError`], whose
//! `Display` text is what the screens show inline.

use std::time::Duration;

use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::services::payloads::{
    AnalyzeRequest, AnalyzeResponse, IngestResponse, MonitorMetrics, MonitorRequest,
    MonitorResponse, PreprocessingOptions, ProcessModelPayload, ProcessStep, SupplyChainResponse,
    TimeSeriesRequest, TimeSeriesResponse,
};

/// Everything that can go wrong between a submit click and a rendered result,
/// classified in the order the screens report it: timeout, then no response,
/// then an HTTP error status, then an `error` field in a 2xx body.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Request timed out. Please try again.")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error("The service is currently unavailable. Please try again later.")]
    Unavailable,
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Application(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Text analysis: embeddings plus per-dimension mean/std statistics.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalyzeResponse, ApiError> {
        self.post_json("/api/analyze", &AnalyzeRequest { text: text.to_string() })
            .await
    }

    /// Time-series analysis: bottlenecks, anomalies, recommendations.
    pub async fn analyze_timeseries(
        &self,
        request: &TimeSeriesRequest,
    ) -> Result<TimeSeriesResponse, ApiError> {
        self.post_json("/api/analyze-timeseries", request).await
    }

    /// Supply-chain analysis over an uploaded data file.
    pub async fn analyze_supply_chain(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<SupplyChainResponse, ApiError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        self.post_multipart("/api/analyze-supply-chain", form).await
    }

    /// Reports the fixed sample metrics and reads back the computed KPIs.
    pub async fn monitor_supply_chain(
        &self,
        metrics: MonitorMetrics,
    ) -> Result<MonitorResponse, ApiError> {
        self.post_json("/api/monitor-supply-chain", &MonitorRequest { metrics })
            .await
    }

    /// Uploads a data file with its declared type and preprocessing steps.
    pub async fn ingest_data(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        data_type: &str,
        preprocessing: &PreprocessingOptions,
    ) -> Result<IngestResponse, ApiError> {
        let preprocessing = serde_json::to_string(preprocessing)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()))
            .text("dataType", data_type.to_string())
            .text("preprocessing", preprocessing);
        self.post_multipart("/api/ingest-data", form).await
    }

    pub async fn fetch_process_model(&self) -> Result<ProcessModelPayload, ApiError> {
        debug!("GET {}", self.url("/api/process-model"));
        let response = self
            .client
            .get(self.url("/api/process-model"))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::decode(response).await
    }

    pub async fn save_process_model(&self, steps: &[ProcessStep]) -> Result<(), ApiError> {
        let payload = ProcessModelPayload { steps: steps.to_vec() };
        let _: serde_json::Value = self.post_json("/api/process-model", &payload).await?;
        Ok(())
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        debug!("POST {}", self.url(path));
        let response = self
            .client
            .post(self.url(path))
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::decode(response).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        debug!("POST {} (multipart)", self.url(path));
        let response = self
            .client
            .post(self.url(path))
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
        let body_error = value
            .get("error")
            .and_then(|e| e.as_str())
            .map(|e| e.to_string());

        if status == StatusCode::SERVICE_UNAVAILABLE {
            warn!("backend unavailable (503)");
            return Err(ApiError::Unavailable);
        }
        if !status.is_success() {
            let message = body_error
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            warn!("backend returned {}: {}", status.as_u16(), message);
            return Err(ApiError::Status { status: status.as_u16(), message });
        }
        if let Some(message) = body_error {
            return Err(ApiError::Application(message));
        }
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    /// Serves exactly one canned HTTP response and returns the base URL.
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn success_body_is_decoded() {
        let base = serve_once(http_response(
            "200 OK",
            r#"{"statistics":{"mean":[1.0,2.0,3.0],"std":[0.1,0.2,0.3]}}"#,
        ))
        .await;
        let client = ApiClient::new(base, Duration::from_secs(5));
        let parsed = client.analyze_text("hello").await.unwrap();
        assert_eq!(parsed.statistics.unwrap().mean, vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            // Hold the connection open without ever answering.
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(socket);
        });
        let client = ApiClient::new(format!("http://{}", addr), Duration::from_millis(250));
        let err = client.analyze_text("hello").await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
        assert_eq!(err.to_string(), "Request timed out. Please try again.");
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ApiClient::new(format!("http://{}", addr), Duration::from_secs(2));
        match client.analyze_text("hello").await.unwrap_err() {
            ApiError::Network(_) => {}
            other => panic!("expected Network, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn service_unavailable_has_its_own_message() {
        let base = serve_once(http_response(
            "503 Service Unavailable",
            r#"{"error":"model loading"}"#,
        ))
        .await;
        let client = ApiClient::new(base, Duration::from_secs(5));
        let err = client.analyze_text("hello").await.unwrap_err();
        assert_eq!(err, ApiError::Unavailable);
        assert_eq!(
            err.to_string(),
            "The service is currently unavailable. Please try again later."
        );
    }

    #[tokio::test]
    async fn error_status_prefers_the_body_message() {
        let base = serve_once(http_response(
            "400 Bad Request",
            r#"{"error":"No text provided"}"#,
        ))
        .await;
        let client = ApiClient::new(base, Duration::from_secs(5));
        let err = client.analyze_text("").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 400, message: "No text provided".to_string() }
        );
    }

    #[tokio::test]
    async fn ok_body_with_error_field_is_an_application_error() {
        let base = serve_once(http_response("200 OK", r#"{"error":"bad input"}"#)).await;
        let client = ApiClient::new(base, Duration::from_secs(5));
        let err = client.analyze_text("hello").await.unwrap_err();
        assert_eq!(err, ApiError::Application("bad input".to_string()));
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = ApiClient::new("http://localhost:5000/", Duration::from_secs(30));
        assert_eq!(client.url("/api/analyze"), "http://localhost:5000/api/analyze");
    }
}
