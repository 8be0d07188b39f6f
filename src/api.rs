//! Generic endpoint dispatch.
//!
//! One [`ApiClient::call`] drives every operation in the registry: it
//! validates the caller's parameters against the endpoint descriptor, then
//! performs either a plain GET or a signed POST and returns the decoded JSON
//! body untouched.

use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::credentials::Credentials;
use crate::endpoints::{Endpoint, Param};
use crate::error::{Result, SdkError};
use crate::signing::{signed_envelope, timestamp_ms};

/// Request header carrying the public API key on authenticated calls.
pub const API_KEY_HEADER: &str = "X-BTK-APIKEY";

/// A request envelope: parameter name to JSON value, in insertion order.
pub type Params = Map<String, Value>;

/// Low-level dispatch client.
///
/// [`crate::BitkubClient`] wraps this with one typed method per endpoint;
/// use it directly to drive registry entries from raw parameter maps.
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Create a client against `base_url`.
    pub fn new(credentials: Credentials, base_url: &str) -> Self {
        Self::with_client(credentials, base_url, Client::new())
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(credentials: Credentials, base_url: &str, http: Client) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// The API root this client talks to, normalized to end with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke one endpoint with the given parameters.
    ///
    /// Required parameters are checked before any network activity; the
    /// response body comes back as raw JSON, exactly as the exchange sent it.
    pub async fn call(&self, endpoint: &Endpoint, params: Params) -> Result<Value> {
        let missing = missing_params(endpoint.params, &params);
        if !missing.is_empty() {
            return Err(SdkError::MissingParams(missing));
        }

        if endpoint.auth {
            self.post_signed(endpoint, params).await
        } else {
            self.get_public(endpoint, params).await
        }
    }

    async fn get_public(&self, endpoint: &Endpoint, params: Params) -> Result<Value> {
        let url = self.endpoint_url(endpoint.path, &build_query(&params));
        debug!(endpoint = endpoint.name, %url, "GET");

        let response = self.http.get(&url).send().await?;
        decode_response(response.status(), response.text().await?)
    }

    async fn post_signed(&self, endpoint: &Endpoint, params: Params) -> Result<Value> {
        let body = signed_envelope(&self.credentials, params, timestamp_ms())?;
        let url = self.endpoint_url(endpoint.path, "");
        debug!(endpoint = endpoint.name, %url, "signed POST");

        let response = self
            .http
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .header(API_KEY_HEADER, self.credentials.api_key())
            .json(&body)
            .send()
            .await?;
        decode_response(response.status(), response.text().await?)
    }

    fn endpoint_url(&self, path: &str, query: &str) -> String {
        format!("{}{}{}", self.base_url, path, query)
    }
}

/// Convert a typed parameter record into a request envelope.
pub fn to_params<T: Serialize>(value: &T) -> Result<Params> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(SdkError::Serialization(format!(
            "expected a JSON object of parameters, got {}",
            other
        ))),
    }
}

/// Collect the names of required parameters absent from `params`.
///
/// Presence only: values are not type-checked, optional keys may be absent,
/// and extraneous keys pass through unmodified.
fn missing_params(accepted: &[Param], params: &Params) -> Vec<String> {
    accepted
        .iter()
        .filter(|p| p.required && !params.contains_key(p.name))
        .map(|p| p.name.to_string())
        .collect()
}

/// Serialize parameters as a `?key=value&...` query string, empty when there
/// are no parameters.
///
/// Values go out verbatim, not percent-encoded, matching what the exchange's
/// own client sends; symbols and numeric parameters never need escaping.
fn build_query(params: &Params) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, query_value(value)))
        .collect();
    format!("?{}", pairs.join("&"))
}

/// Render one query value: strings bare, everything else as compact JSON.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Map an HTTP response to the decoded body or an API error.
fn decode_response(status: StatusCode, body: String) -> Result<Value> {
    if !status.is_success() {
        return Err(SdkError::Api { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints;

    fn params(entries: &[(&str, Value)]) -> Params {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&Params::new()), "");
    }

    #[test]
    fn test_build_query_preserves_order() {
        let params = params(&[
            ("sym", Value::String("THB_BTC".to_string())),
            ("lmt", Value::from(10u64)),
        ]);
        assert_eq!(build_query(&params), "?sym=THB_BTC&lmt=10");
    }

    #[test]
    fn test_query_values_are_not_percent_encoded() {
        // Preserved behavior: the exchange's own client sends values
        // verbatim, so characters that would normally be escaped are not.
        let params = params(&[("sym", Value::String("THB BTC&x".to_string()))]);
        assert_eq!(build_query(&params), "?sym=THB BTC&x");
    }

    #[test]
    fn test_missing_params_reports_every_absent_name() {
        let missing = missing_params(endpoints::MARKET_TRADING_VIEW.params, &Params::new());
        assert_eq!(missing, ["sym", "int", "from", "to"]);
    }

    #[test]
    fn test_missing_params_allows_absent_optionals_and_extras() {
        let input = params(&[
            ("sym", Value::String("THB_BTC".to_string())),
            ("unknown", Value::from(1u64)),
        ]);
        let missing = missing_params(endpoints::MARKET_MY_ORDER_HISTORY.params, &input);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_decode_response_success_passes_body_through() {
        let value = decode_response(StatusCode::OK, r#"{"ts":1529999999}"#.to_string()).unwrap();
        assert_eq!(value["ts"], Value::from(1_529_999_999u64));
    }

    #[test]
    fn test_decode_response_error_carries_status_and_body() {
        let err = decode_response(StatusCode::BAD_REQUEST, r#"{"error":3}"#.to_string());
        match err {
            Err(SdkError::Api { status, body }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body, r#"{"error":3}"#);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_response_rejects_invalid_json_on_success() {
        let err = decode_response(StatusCode::OK, "not json".to_string());
        assert!(matches!(err, Err(SdkError::Serialization(_))));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new(Credentials::new("k", "s"), "https://api.bitkub.com/api");
        assert_eq!(client.base_url(), "https://api.bitkub.com/api/");
    }

    #[test]
    fn test_endpoint_urls() {
        let client = ApiClient::new(Credentials::new("k", "s"), "https://api.bitkub.com/api/");
        assert_eq!(
            client.endpoint_url(endpoints::SERVER_TIME.path, ""),
            "https://api.bitkub.com/api/servertime"
        );

        let query = build_query(&params(&[
            ("sym", Value::String("THB_BTC".to_string())),
            ("lmt", Value::from(10u64)),
        ]));
        assert_eq!(
            client.endpoint_url(endpoints::MARKET_TRADES.path, &query),
            "https://api.bitkub.com/api/market/trades?sym=THB_BTC&lmt=10"
        );
    }

    #[test]
    fn test_signed_order_envelope_matches_known_payload() {
        use crate::signing::{sign_payload, signed_envelope};
        use crate::types::{OrderPlacement, OrderType};
        use rust_decimal_macros::dec;

        let order = OrderPlacement {
            sym: "THB_BTC".to_string(),
            amt: dec!(100),
            rat: dec!(1000000),
            typ: OrderType::Limit,
        };
        let envelope = signed_envelope(
            &Credentials::new("k", "s"),
            to_params(&order).unwrap(),
            1_529_999_999_999,
        )
        .unwrap();

        let keys: Vec<&str> = envelope.keys().map(String::as_str).collect();
        assert_eq!(keys, ["sym", "amt", "rat", "typ", "ts", "sig"]);

        // The signature covers the parameters and `ts` in transmission order.
        let expected = sign_payload(
            r#"{"sym":"THB_BTC","amt":100,"rat":1000000,"typ":"limit","ts":1529999999999}"#,
            "s",
        );
        assert_eq!(envelope["sig"], Value::String(expected));
    }

    #[tokio::test]
    async fn test_call_fails_before_network_on_missing_params() {
        // The base URL does not resolve; a validation failure must surface
        // before the transport is ever touched.
        let client = ApiClient::new(Credentials::new("k", "s"), "http://bitkub.invalid/api/");
        let err = client
            .call(&endpoints::MARKET_TRADES, Params::new())
            .await
            .unwrap_err();
        match err {
            SdkError::MissingParams(names) => assert_eq!(names, ["sym", "lmt"]),
            other => panic!("expected MissingParams, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_with_optional_only_params_passes_validation() {
        let client = ApiClient::new(Credentials::new("k", "s"), "http://bitkub.invalid/api/");
        // `server_time` has no parameters at all, so an empty envelope must
        // get past validation and fail only at the transport.
        let err = client
            .call(&endpoints::SERVER_TIME, Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Transport(_)));
    }
}
