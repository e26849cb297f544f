//! bitFlyer public ticker adapter.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::domain::error::PricelogError;
use crate::domain::ticker::Ticker;
use crate::ports::config_port::ConfigPort;
use crate::ports::ticker_port::TickerPort;

pub const DEFAULT_BASE_URL: &str = "https://api.bitflyer.jp";
pub const DEFAULT_PRODUCT_CODE: &str = "BTC_JPY";

pub struct BitflyerAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
    product_code: String,
}

impl BitflyerAdapter {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_BASE_URL.into(), DEFAULT_PRODUCT_CODE.into())
    }

    pub fn with_endpoint(base_url: String, product_code: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url,
            product_code,
        }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let base_url = config
            .get_string("ticker", "base_url")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let product_code = config
            .get_string("ticker", "product_code")
            .unwrap_or_else(|| DEFAULT_PRODUCT_CODE.to_string());
        Self::with_endpoint(base_url, product_code)
    }
}

impl Default for BitflyerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerPort for BitflyerAdapter {
    fn fetch_ticker(&self) -> Result<Ticker, PricelogError> {
        let url = format!(
            "{}/v1/ticker?product_code={}",
            self.base_url, self.product_code
        );
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PricelogError::Fetch {
                reason: format!("GET {url} failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricelogError::Fetch {
                reason: format!("HTTP {status} from {url}"),
            });
        }

        let body = response.text().map_err(|e| PricelogError::Fetch {
            reason: format!("failed to read response body: {e}"),
        })?;
        parse_ticker(&body)
    }
}

/// Subset of the bitFlyer ticker response this task consumes.
#[derive(Debug, Deserialize)]
struct TickerResponse {
    #[serde(default)]
    product_code: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    ltp: Option<f64>,
    #[serde(default, deserialize_with = "number_or_string")]
    best_bid: Option<f64>,
    #[serde(default, deserialize_with = "number_or_string")]
    best_ask: Option<f64>,
}

/// Parse a ticker response body. A missing or non-numeric `ltp` is a hard
/// parse failure; it is never coerced to a NaN sentinel.
pub fn parse_ticker(body: &str) -> Result<Ticker, PricelogError> {
    let response: TickerResponse =
        serde_json::from_str(body).map_err(|e| PricelogError::Parse {
            reason: format!("invalid ticker response: {e}"),
        })?;

    let ltp = response.ltp.ok_or_else(|| PricelogError::Parse {
        reason: "ticker response has no ltp field".into(),
    })?;

    Ok(Ticker {
        product_code: response.product_code.unwrap_or_default(),
        ltp,
        best_bid: response.best_bid,
        best_ask: response.best_ask,
    })
}

/// The exchange serves price fields as either JSON numbers or numeric
/// strings. Anything else (including "NaN") is rejected.
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom("number out of f64 range")),
        Some(serde_json::Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(de::Error::custom(format!("non-numeric value: {s:?}"))),
        },
        Some(other) => Err(de::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}
