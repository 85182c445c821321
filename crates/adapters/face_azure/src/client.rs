//! HTTP request pipeline for the Azure Face API.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use facehub_domain::error::ServiceError;

use crate::config::FaceApiConfig;

/// Host pattern the region is substituted into.
const FACE_API_HOST: &str = "api.cognitive.microsoft.com/face/v1.0";

/// Header carrying the subscription key credential.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Fixed message reported when a request times out.
pub const TIMEOUT_MESSAGE: &str = "timeout from face api";

/// Fixed message reported when the service cannot be reached.
pub const CONNECT_MESSAGE: &str = "cannot connect to face api";

/// Fixed message reported when a non-success body carries no
/// `error.message` field.
pub const MALFORMED_MESSAGE: &str = "malformed error response from face api";

/// Request payload for [`AzureFaceClient::call_api`].
#[derive(Debug, Clone)]
pub enum Payload {
    /// No request body.
    None,
    /// Structured data serialized as JSON.
    Json(Value),
    /// Raw bytes sent as `application/octet-stream`.
    Binary(Vec<u8>),
}

/// Stateless, session-less client for the Face API.
///
/// Holds the resolved origin, the credential and the timeout. No network
/// activity happens until the first call.
#[derive(Debug, Clone)]
pub struct AzureFaceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl AzureFaceClient {
    /// Build a client for the configured region.
    #[must_use]
    pub fn new(config: &FaceApiConfig) -> Self {
        Self::with_base_url(
            format!("https://{}.{FACE_API_HOST}", config.region),
            &config.api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Build a client against an explicit origin.
    ///
    /// Used by tests and by deployments outside the public cloud pattern.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: &str, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout,
        }
    }

    /// Issue one API call and parse the response body as JSON.
    ///
    /// Sets the subscription-key header and a content type matching the
    /// payload kind (`application/octet-stream` for binary payloads,
    /// `application/json` otherwise). The body is parsed as JSON
    /// regardless of status; an empty body parses as JSON null.
    ///
    /// # Errors
    ///
    /// Every failure mode is a [`ServiceError`]: transport-level
    /// connection failures ([`CONNECT_MESSAGE`]), timeout expiry
    /// ([`TIMEOUT_MESSAGE`]), non-success statuses (carrying the remote
    /// `error.message` text, or [`MALFORMED_MESSAGE`] when the field is
    /// absent) and unparsable bodies. The cases are only distinguishable
    /// by message text.
    pub async fn call_api(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        params: &[(&str, &str)],
    ) -> Result<Value, ServiceError> {
        let url = format!("{}/{path}", self.base_url);
        let mut request = self
            .http
            .request(method, &url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .timeout(self.timeout);

        if !params.is_empty() {
            request = request.query(params);
        }

        request = match payload {
            Payload::None => request.header(CONTENT_TYPE, "application/json"),
            Payload::Json(data) => request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&data).map_err(|_| {
                    ServiceError::new("unserializable payload for face api")
                })?),
            Payload::Binary(bytes) => request
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(bytes),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                tracing::warn!(url = %url, "timeout from face api");
                return Err(ServiceError::new(TIMEOUT_MESSAGE));
            }
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "can't connect to face api");
                return Err(ServiceError::new(CONNECT_MESSAGE));
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) if err.is_timeout() => {
                tracing::warn!(url = %url, "timeout from face api");
                return Err(ServiceError::new(TIMEOUT_MESSAGE));
            }
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "can't read face api response");
                return Err(ServiceError::new(CONNECT_MESSAGE));
            }
        };

        let answer: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .map_err(|_| ServiceError::new("invalid json from face api"))?
        };
        tracing::debug!(status = %status, body = %answer, "read from face api");

        if status.as_u16() < 300 {
            return Ok(answer);
        }

        tracing::warn!(status = %status, url = %url, "error from face api");
        match answer.pointer("/error/message").and_then(Value::as_str) {
            Some(message) => Err(ServiceError::new(message)),
            None => Err(ServiceError::new(MALFORMED_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::RawQuery;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use serde_json::json;

    /// Serve a router on an ephemeral local port, returning its origin.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(origin: &str) -> AzureFaceClient {
        AzureFaceClient::with_base_url(origin, "secret", Duration::from_secs(2))
    }

    #[test]
    fn should_resolve_origin_from_region() {
        let config = FaceApiConfig {
            region: "westeurope".to_string(),
            ..FaceApiConfig::default()
        };
        let client = AzureFaceClient::new(&config);
        assert_eq!(
            client.base_url,
            "https://westeurope.api.cognitive.microsoft.com/face/v1.0"
        );
    }

    #[tokio::test]
    async fn should_return_parsed_json_when_status_is_success() {
        let router = Router::new().route(
            "/persongroups",
            get(|| async { axum::Json(json!([{"personGroupId": "family", "name": "Family"}])) }),
        );
        let origin = serve(router).await;

        let answer = client(&origin)
            .call_api(Method::GET, "persongroups", Payload::None, &[])
            .await
            .unwrap();

        assert_eq!(answer[0]["personGroupId"], "family");
    }

    #[tokio::test]
    async fn should_parse_empty_success_body_as_null() {
        let router = Router::new().route(
            "/persongroups/family/train",
            post(|| async { StatusCode::OK }),
        );
        let origin = serve(router).await;

        let answer = client(&origin)
            .call_api(Method::POST, "persongroups/family/train", Payload::None, &[])
            .await
            .unwrap();

        assert_eq!(answer, Value::Null);
    }

    #[tokio::test]
    async fn should_fail_with_remote_message_when_status_is_error() {
        let router = Router::new().route(
            "/persongroups/family",
            axum::routing::put(|| async {
                (
                    StatusCode::CONFLICT,
                    axum::Json(json!({"error": {"message": "PersonGroupExists"}})),
                )
            }),
        );
        let origin = serve(router).await;

        let err = client(&origin)
            .call_api(
                Method::PUT,
                "persongroups/family",
                Payload::Json(json!({"name": "Family"})),
                &[],
            )
            .await
            .unwrap_err();

        assert_eq!(err.message(), "PersonGroupExists");
    }

    #[tokio::test]
    async fn should_fail_with_fixed_message_when_error_body_lacks_message() {
        let router = Router::new().route(
            "/persongroups",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({"unexpected": true})),
                )
            }),
        );
        let origin = serve(router).await;

        let err = client(&origin)
            .call_api(Method::GET, "persongroups", Payload::None, &[])
            .await
            .unwrap_err();

        assert_eq!(err.message(), MALFORMED_MESSAGE);
    }

    #[tokio::test]
    async fn should_fail_with_timeout_message_regardless_of_payload_kind() {
        let router = Router::new().route(
            "/{*path}",
            axum::routing::any(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                StatusCode::OK
            }),
        );
        let origin = serve(router).await;
        let client =
            AzureFaceClient::with_base_url(origin.as_str(), "secret", Duration::from_millis(100));

        let json_err = client
            .call_api(
                Method::POST,
                "persongroups/family/persons",
                Payload::Json(json!({"name": "Alice"})),
                &[],
            )
            .await
            .unwrap_err();
        let binary_err = client
            .call_api(
                Method::POST,
                "persongroups/family/persons/p1/persistedFaces",
                Payload::Binary(vec![1, 2, 3]),
                &[],
            )
            .await
            .unwrap_err();

        assert_eq!(json_err.message(), TIMEOUT_MESSAGE);
        assert_eq!(binary_err.message(), TIMEOUT_MESSAGE);
    }

    #[tokio::test]
    async fn should_fail_with_connect_message_when_service_unreachable() {
        // Bind to learn a free port, then drop the listener before calling.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&origin)
            .call_api(Method::GET, "persongroups", Payload::None, &[])
            .await
            .unwrap_err();

        assert_eq!(err.message(), CONNECT_MESSAGE);
    }

    #[tokio::test]
    async fn should_send_credential_and_json_content_type() {
        let router = Router::new().route(
            "/persongroups",
            get(|headers: HeaderMap| async move {
                axum::Json(json!({
                    "key": headers
                        .get("Ocp-Apim-Subscription-Key")
                        .and_then(|value| value.to_str().ok()),
                    "content_type": headers
                        .get("content-type")
                        .and_then(|value| value.to_str().ok()),
                }))
            }),
        );
        let origin = serve(router).await;

        let answer = client(&origin)
            .call_api(Method::GET, "persongroups", Payload::None, &[])
            .await
            .unwrap();

        assert_eq!(answer["key"], "secret");
        assert_eq!(answer["content_type"], "application/json");
    }

    #[tokio::test]
    async fn should_send_octet_stream_content_type_for_binary_payloads() {
        let router = Router::new().route(
            "/faces",
            post(|headers: HeaderMap, body: axum::body::Bytes| async move {
                axum::Json(json!({
                    "content_type": headers
                        .get("content-type")
                        .and_then(|value| value.to_str().ok()),
                    "len": body.len(),
                }))
            }),
        );
        let origin = serve(router).await;

        let answer = client(&origin)
            .call_api(Method::POST, "faces", Payload::Binary(vec![7; 16]), &[])
            .await
            .unwrap();

        assert_eq!(answer["content_type"], "application/octet-stream");
        assert_eq!(answer["len"], 16);
    }

    #[tokio::test]
    async fn should_append_query_parameters() {
        let router = Router::new().route(
            "/persongroups",
            get(|RawQuery(query): RawQuery| async move { axum::Json(json!({"query": query})) }),
        );
        let origin = serve(router).await;

        let answer = client(&origin)
            .call_api(
                Method::GET,
                "persongroups",
                Payload::None,
                &[("top", "10"), ("start", "family")],
            )
            .await
            .unwrap();

        assert_eq!(answer["query"], "top=10&start=family");
    }

    #[tokio::test]
    async fn should_fail_when_success_body_is_not_json() {
        let router = Router::new().route("/persongroups", get(|| async { "not json" }));
        let origin = serve(router).await;

        let err = client(&origin)
            .call_api(Method::GET, "persongroups", Payload::None, &[])
            .await
            .unwrap_err();

        assert_eq!(err.message(), "invalid json from face api");
    }
}
