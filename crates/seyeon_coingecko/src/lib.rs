pub mod error;
pub mod markets;
pub mod method;

pub use error::CoingeckoError;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

const UNKNOWN_ERROR: &str = "Unknown error";

pub struct CoingeckoClient {
    base_url: String,
    reqwest: Client,
}

impl CoingeckoClient {
    pub fn new() -> Result<Self, CoingeckoError> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, CoingeckoError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let reqwest = ClientBuilder::new()
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            reqwest,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> Result<T, CoingeckoError> {
        debug!(url, "requesting");

        let response = self.reqwest.get(url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%status, bytes = body.len(), "response received");
        decode_body(status, &body)
    }

    pub async fn call<M: method::Method>(
        &self,
        params: &M::Params,
    ) -> Result<M::Response, CoingeckoError> {
        let url = format!("{}{}", self.base_url, M::PATH);
        self.get(&url, params).await
    }
}

/// The body is parsed before the status is looked at, so a non-JSON error
/// page surfaces as a decode failure rather than an API error.
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, CoingeckoError> {
    let value: Value = serde_json::from_str(body)?;

    if status != StatusCode::OK {
        let message = error_message(&value);
        warn!(%status, message = %message, "CoinGecko rejected the request");
        return Err(CoingeckoError::Api { message });
    }

    Ok(serde_json::from_value(value)?)
}

fn error_message(body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => UNKNOWN_ERROR.to_string(),
        Some(other) => other.to_string(),
    }
}
