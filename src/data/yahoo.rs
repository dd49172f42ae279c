//! Yahoo Finance chart payload and its normalization into flat candles.
//!
//! The chart API answers with one timestamp array plus parallel OHLC columns whose
//! entries may be `null` (holidays, halted sessions). Downstream code only ever sees
//! complete `Candle` rows.

use {
    crate::{config::DF, domain::Candle, utils::TimeUtils},
    anyhow::{Result, anyhow, bail},
    serde::Deserialize,
};

#[derive(Debug, Deserialize)]
pub struct YahooResponse {
    chart: Option<YahooChart>,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Option<Vec<Quote>>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
}

impl Quote {
    fn value_at(series: &Option<Vec<Option<f64>>>, idx: usize) -> Option<f64> {
        series.as_ref().and_then(|v| v.get(idx)).and_then(|v| *v)
    }

    fn candle_at(&self, idx: usize, timestamp_ms: i64) -> Option<Candle> {
        let candle = Candle::new(
            timestamp_ms,
            Self::value_at(&self.open, idx)?,
            Self::value_at(&self.high, idx)?,
            Self::value_at(&self.low, idx)?,
            Self::value_at(&self.close, idx)?,
        );
        candle.is_finite().then_some(candle)
    }
}

/// Flattens a chart payload into candles, oldest first as delivered.
/// Rows with any missing price are dropped.
pub fn normalize_chart(response: YahooResponse) -> Result<Vec<Candle>> {
    let chart = response
        .chart
        .ok_or_else(|| anyhow!("response has no chart object"))?;

    if let Some(err) = chart.error {
        bail!(
            "{}: {}",
            err.code.unwrap_or_else(|| "error".to_string()),
            err.description.unwrap_or_default()
        );
    }

    let result = chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| anyhow!("chart has no result"))?;

    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result
        .indicators
        .and_then(|i| i.quote)
        .and_then(|mut q| q.pop())
        .unwrap_or_default();

    let candles: Vec<Candle> = timestamps
        .iter()
        .enumerate()
        .filter_map(|(idx, ts)| quote.candle_at(idx, ts * TimeUtils::MS_IN_S))
        .collect();

    if DF.log_fetch && candles.len() < timestamps.len() {
        log::info!(
            "Dropped {} incomplete rows out of {}",
            timestamps.len() - candles.len(),
            timestamps.len()
        );
    }

    Ok(candles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> YahooResponse {
        serde_json::from_str(json).expect("valid sample json")
    }

    #[test]
    fn flattens_columns_and_skips_null_rows() {
        let body = parse(
            r#"{
                "chart": {
                    "result": [{
                        "meta": {"symbol": "GC=F", "currency": "USD"},
                        "timestamp": [1709251200, 1709510400, 1709596800],
                        "indicators": {
                            "quote": [{
                                "open":  [2050.1, null, 2101.0],
                                "high":  [2060.0, 2090.0, 2120.5],
                                "low":   [2040.0, 2070.0, 2095.0],
                                "close": [2055.5, 2085.0, 2110.0],
                                "volume": [1000, 2000, 3000]
                            }]
                        }
                    }],
                    "error": null
                }
            }"#,
        );
        let candles = normalize_chart(body).expect("normalizes");
        assert_eq!(candles.len(), 2);
        assert_eq!(
            candles[0],
            Candle::new(1_709_251_200_000, 2050.1, 2060.0, 2040.0, 2055.5)
        );
        assert_eq!(candles[1].timestamp_ms, 1_709_596_800_000);
        assert_eq!(candles[1].close_price, 2110.0);
    }

    #[test]
    fn surfaces_provider_errors() {
        let body = parse(
            r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}}"#,
        );
        let err = normalize_chart(body).expect_err("error payload");
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn missing_result_is_an_error() {
        assert!(normalize_chart(parse(r#"{"chart": {"result": []}}"#)).is_err());
        assert!(normalize_chart(parse(r#"{}"#)).is_err());
    }

    #[test]
    fn empty_quote_yields_no_candles() {
        let body = parse(r#"{"chart": {"result": [{"timestamp": [1, 2], "indicators": {"quote": []}}]}}"#);
        assert!(normalize_chart(body).expect("normalizes").is_empty());
    }
}
