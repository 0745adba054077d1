//! HTTP client for the credidesk API.
//!
//! [`CredideskClient::execute`] owns the whole request contract: URL
//! building, header composition, bearer-token attachment, response
//! classification (204 / JSON / text), envelope unwrapping, and error
//! normalization. The per-domain modules are thin callers on top of it.

pub mod auth;
pub mod payment_methods;
pub mod quotes;
pub mod receipts;

use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::token::TokenStore;
use crate::url::{build_url, QueryParams};

/// Request body for [`CredideskClient::execute`].
#[derive(Debug)]
pub enum RequestBody {
    /// JSON value, serialized to text with the JSON content type.
    Json(Value),
    /// Pre-serialized payload, passed through unchanged.
    Raw(String),
    /// URL-encoded form fields.
    Form(Vec<(String, String)>),
    /// Multipart form; the transport sets the boundary.
    Multipart(reqwest::multipart::Form),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl RequestBody {
    /// True for payloads that must not carry the JSON content type, so the
    /// transport can set the correct encoding itself.
    pub fn is_opaque(&self) -> bool {
        matches!(
            self,
            RequestBody::Form(_) | RequestBody::Multipart(_) | RequestBody::Bytes(_)
        )
    }
}

/// Per-request options: query parameters, body, and extra headers.
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub params: QueryParams,
    pub body: Option<RequestBody>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query parameters.
    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Set a JSON body from any serializable value.
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Set the body directly.
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header, overriding the defaults on collision.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client for the credidesk API.
#[derive(Debug, Clone)]
pub struct CredideskClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<TokenStore>,
}

impl CredideskClient {
    /// Create a client from a configuration.
    pub fn new(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url();
        let tokens = Arc::new(TokenStore::open(&config.token_file));
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens,
        }
    }

    /// Create from environment (CREDIDESK_URL or default).
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Get the effective base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access the persisted token store.
    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// Execute a request and return the unwrapped JSON result.
    ///
    /// `204 No Content` resolves to `Value::Null` without reading a body.
    /// Any other success body is classified by its declared content type
    /// (JSON parsed, everything else read as text) and unwrapped from the
    /// `{ success, data, .. }` envelope when one is present. Non-success
    /// statuses become [`ClientError::Api`].
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        let url = build_url(&self.base_url, path, &options.params);
        let token = self.tokens.get();
        let headers = resolve_headers(token.as_deref(), &options.headers, options.body.as_ref())?;

        debug!(%method, %url, "Sending request");

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(body) = options.body {
            request = match body {
                RequestBody::Json(value) => request.body(serde_json::to_string(&value)?),
                RequestBody::Raw(text) => request.body(text),
                RequestBody::Form(fields) => request.form(&fields),
                RequestBody::Multipart(form) => request.multipart(form),
                RequestBody::Bytes(bytes) => request.body(bytes),
            };
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            debug!(%url, "Request completed with no content");
            return Ok(Value::Null);
        }

        let payload = read_payload(response).await;

        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "Request failed");
            return Err(api_error(status, payload));
        }

        Ok(unwrap_envelope(payload))
    }

    /// Execute a request and decode the unwrapped result into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let value = self.execute(method, path, options).await?;
        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// GET a resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.request(Method::GET, path, options).await
    }

    /// POST a resource.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::POST, path, options).await
    }

    /// PUT a resource.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.request(Method::PUT, path, options).await
    }

    /// PATCH a resource.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::PATCH, path, options).await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::DELETE, path, options).await
    }
}

/// Compose the final header set for a request.
///
/// Base headers accept and declare JSON; a stored token adds the bearer
/// header; custom headers override on collision; opaque bodies drop the
/// content type entirely.
fn resolve_headers(
    token: Option<&str>,
    custom: &HeaderMap,
    body: Option<&RequestBody>,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ClientError::InvalidInput("auth token contains invalid header characters".to_string())
        })?;
        headers.insert(header::AUTHORIZATION, value);
    }

    for (name, value) in custom {
        headers.insert(name, value.clone());
    }

    if body.map(RequestBody::is_opaque).unwrap_or(false) {
        headers.remove(header::CONTENT_TYPE);
    }

    Ok(headers)
}

/// Read the response body, classified by its declared content type.
///
/// JSON bodies that fail to parse degrade to `Null` so the HTTP status
/// stays the source of truth; everything else is read as plain text.
async fn read_payload(response: reqwest::Response) -> Value {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    match response.text().await {
        Ok(text) if is_json => serde_json::from_str(&text).unwrap_or(Value::Null),
        Ok(text) => Value::String(text),
        Err(_) => Value::Null,
    }
}

/// Unwrap the `{ success, data, .. }` envelope when present.
fn unwrap_envelope(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Build a [`ClientError::Api`] from a non-success response payload.
fn api_error(status: StatusCode, payload: Value) -> ClientError {
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| payload.get("error").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
        });

    let field_errors = payload
        .get("errors")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    ClientError::Api {
        status: status.as_u16(),
        message,
        payload,
        field_errors,
    }
}

#[cfg(test)]
pub(crate) fn test_client(base_url: &str, dir: &tempfile::TempDir) -> CredideskClient {
    CredideskClient::new(ClientConfig::new(base_url).with_token_file(dir.path().join("auth.json")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header as header_matcher, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ==== resolve_headers ====

    #[test]
    fn resolve_headers_sets_json_defaults() {
        let headers = resolve_headers(None, &HeaderMap::new(), None).unwrap();
        assert_eq!(headers.get(header::ACCEPT).unwrap(), "application/json");
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn resolve_headers_adds_bearer_token() {
        let headers = resolve_headers(Some("abc123"), &HeaderMap::new(), None).unwrap();
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn resolve_headers_rejects_tokens_with_invalid_characters() {
        let result = resolve_headers(Some("a\nb"), &HeaderMap::new(), None);
        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
    }

    #[test]
    fn resolve_headers_lets_custom_headers_override() {
        let mut custom = HeaderMap::new();
        custom.insert(header::ACCEPT, HeaderValue::from_static("text/csv"));
        let headers = resolve_headers(None, &custom, None).unwrap();
        assert_eq!(headers.get(header::ACCEPT).unwrap(), "text/csv");
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn resolve_headers_strips_content_type_for_opaque_bodies() {
        let body = RequestBody::Form(vec![("a".to_string(), "1".to_string())]);
        let headers = resolve_headers(Some("abc"), &HeaderMap::new(), Some(&body)).unwrap();
        assert!(headers.get(header::CONTENT_TYPE).is_none());
        assert_eq!(headers.get(header::ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn resolve_headers_keeps_content_type_for_json_and_raw_bodies() {
        let body = RequestBody::Raw("{\"pre\":true}".to_string());
        let headers = resolve_headers(None, &HeaderMap::new(), Some(&body)).unwrap();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    // ==== unwrap_envelope ====

    #[test]
    fn unwrap_envelope_extracts_data() {
        let payload = json!({"success": true, "data": {"x": 1}});
        assert_eq!(unwrap_envelope(payload), json!({"x": 1}));
    }

    #[test]
    fn unwrap_envelope_passes_bare_objects_through() {
        let payload = json!({"x": 1});
        assert_eq!(unwrap_envelope(payload), json!({"x": 1}));
    }

    #[test]
    fn unwrap_envelope_passes_non_objects_through() {
        assert_eq!(unwrap_envelope(json!([1, 2])), json!([1, 2]));
        assert_eq!(unwrap_envelope(Value::Null), Value::Null);
    }

    #[test]
    fn unwrap_envelope_yields_null_for_null_data() {
        let payload = json!({"success": true, "data": null});
        assert_eq!(unwrap_envelope(payload), Value::Null);
    }

    // ==== api_error ====

    #[test]
    fn api_error_prefers_the_message_field() {
        let err = api_error(StatusCode::NOT_FOUND, json!({"message": "not found"}));
        match err {
            ClientError::Api {
                status,
                message,
                payload,
                field_errors,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
                assert_eq!(payload, json!({"message": "not found"}));
                assert!(field_errors.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_the_error_field() {
        let err = api_error(StatusCode::BAD_REQUEST, json!({"error": "bad monto"}));
        match err {
            ClientError::Api { message, .. } => assert_eq!(message, "bad monto"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_the_status_text() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, Value::String("boom".into()));
        match err {
            ClientError::Api {
                message, payload, ..
            } => {
                assert_eq!(message, "Internal Server Error");
                assert_eq!(payload, Value::String("boom".into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_uses_a_generic_fallback_for_unknown_statuses() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = api_error(status, Value::Null);
        match err {
            ClientError::Api { message, .. } => {
                assert_eq!(message, "Request failed with status 599");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_collects_field_errors() {
        let payload = json!({
            "message": "validation failed",
            "errors": [{"field": "monto", "message": "required"}]
        });
        let err = api_error(StatusCode::UNPROCESSABLE_ENTITY, payload);
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0]["field"], "monto");
    }

    // ==== execute ====

    #[tokio::test]
    async fn execute_unwraps_data_envelope() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/presupuestos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": {"x": 1}})),
            )
            .mount(&server)
            .await;

        let result = client
            .execute(Method::GET, "/presupuestos", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result, json!({"x": 1}));
    }

    #[tokio::test]
    async fn execute_returns_bare_payloads_unchanged() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"x": 1})))
            .mount(&server)
            .await;

        let result = client
            .execute(Method::GET, "/ping", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result, json!({"x": 1}));
    }

    #[tokio::test]
    async fn execute_resolves_204_to_null() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("DELETE"))
            .and(path("/presupuestos/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result = client
            .execute(Method::DELETE, "/presupuestos/1", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn execute_reports_api_error_details() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/presupuestos/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
            .mount(&server)
            .await;

        let err = client
            .execute(Method::GET, "/presupuestos/99", RequestOptions::new())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Server returned 404: not found");
        assert_eq!(err.status(), Some(404));
        match err {
            ClientError::Api {
                message, payload, ..
            } => {
                assert_eq!(message, "not found");
                assert_eq!(payload, json!({"message": "not found"}));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_status_text() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(500).set_body_raw("boom", "text/plain"))
            .mount(&server)
            .await;

        let err = client
            .execute(Method::GET, "/boom", RequestOptions::new())
            .await
            .unwrap_err();
        match err {
            ClientError::Api {
                status,
                message,
                payload,
                ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
                assert_eq!(payload, Value::String("boom".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_attaches_bearer_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);
        client.token_store().set("abc123").unwrap();

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header_matcher("Authorization", "Bearer abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client
            .execute(Method::GET, "/ping", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn execute_omits_authorization_without_a_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        client
            .execute(Method::GET, "/ping", RequestOptions::new())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn custom_headers_reach_the_wire() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/export"))
            .and(header_matcher("Accept", "text/csv"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("a;b", "text/csv"))
            .expect(1)
            .mount(&server)
            .await;

        let options =
            RequestOptions::new().header(header::ACCEPT, HeaderValue::from_static("text/csv"));
        let result = client.execute(Method::GET, "/export", options).await.unwrap();
        assert_eq!(result, Value::String("a;b".to_string()));
    }

    #[tokio::test]
    async fn execute_uses_absolute_urls_unmodified() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        // Base URL points nowhere; the absolute path must win.
        let client = test_client("http://localhost:1", &dir);

        Mock::given(method("GET"))
            .and(path("/absolute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let url = format!("{}/absolute", server.uri());
        let result = client
            .execute(Method::GET, &url, RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn form_body_is_url_encoded_without_json_content_type() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let body = RequestBody::Form(vec![
            ("cliente".to_string(), "ACME".to_string()),
            ("monto".to_string(), "1000".to_string()),
        ]);
        client
            .execute(Method::POST, "/submit", RequestOptions::new().body(body))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert_eq!(content_type, "application/x-www-form-urlencoded");
        assert_eq!(requests[0].body, b"cliente=ACME&monto=1000".to_vec());
    }

    #[tokio::test]
    async fn multipart_body_gets_a_boundary_content_type() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let form = reqwest::multipart::Form::new().text("campo", "valor");
        client
            .execute(
                Method::POST,
                "/upload",
                RequestOptions::new().body(RequestBody::Multipart(form)),
            )
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(
            content_type.starts_with("multipart/form-data; boundary="),
            "unexpected content type {content_type:?}"
        );
    }

    #[tokio::test]
    async fn bytes_body_sends_raw_octets_without_content_type() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("POST"))
            .and(path("/blob"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        client
            .execute(
                Method::POST,
                "/blob",
                RequestOptions::new().body(RequestBody::Bytes(vec![0, 159, 146, 150])),
            )
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("content-type").is_none());
        assert_eq!(requests[0].body, vec![0, 159, 146, 150]);
    }

    #[tokio::test]
    async fn raw_string_body_passes_through_unchanged() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("POST"))
            .and(path("/raw"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        client
            .execute(
                Method::POST,
                "/raw",
                RequestOptions::new().body(RequestBody::Raw("{\"pre\":true}".to_string())),
            )
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].body, b"{\"pre\":true}".to_vec());
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn malformed_json_payload_degrades_to_null() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
            .mount(&server)
            .await;

        let result = client
            .execute(Method::GET, "/broken", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn non_json_success_body_returns_text() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("pong", "text/plain"))
            .mount(&server)
            .await;

        let result = client
            .execute(Method::GET, "/health", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result, Value::String("pong".to_string()));
    }

    #[tokio::test]
    async fn request_decodes_into_typed_values() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/tags"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": ["a", "b"]})),
            )
            .mount(&server)
            .await;

        let tags: Vec<String> = client.get("/tags", RequestOptions::new()).await.unwrap();
        assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn request_surfaces_decode_failures_as_json_errors() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server.uri(), &dir);

        Mock::given(method("GET"))
            .and(path("/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": 7})))
            .mount(&server)
            .await;

        let result: Result<Vec<String>> = client.get("/tags", RequestOptions::new()).await;
        assert!(matches!(result, Err(ClientError::Json(_))));
    }
}
