use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single input row: a trading date and its closing price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub close: f64,
}

impl PriceRow {
    pub fn new(date: DateTime<Utc>, close: f64) -> Self {
        Self { date, close }
    }
}

/// Input row augmented with its moving average value
///
/// `sma` is `None` until the averaging window is full.
#[derive(Debug, Clone, PartialEq)]
pub struct SmaRow {
    pub date: DateTime<Utc>,
    pub close: f64,
    pub sma: Option<f64>,
}

impl SmaRow {
    pub fn from_price(row: &PriceRow, sma: Option<f64>) -> Self {
        Self {
            date: row.date,
            close: row.close,
            sma,
        }
    }
}

/// Execution metadata handed over by the hosting runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self {
            request_id: "local".to_string(),
            function_name: "sma-handler".to_string(),
            deadline_ms: None,
        }
    }
}

impl InvocationContext {
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }
}

/// Response returned to the hosting runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: serde_json::Value,
}

impl ResponseEnvelope {
    pub fn new(status_code: u16, body: serde_json::Value) -> Self {
        Self { status_code, body }
    }
}

/// ISO-8601 instants with millisecond precision, e.g. `2022-01-01T00:00:00.000Z`
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub fn format(date: &DateTime<Utc>) -> String {
        date.format(FORMAT).to_string()
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
