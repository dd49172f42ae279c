use {
    crate::{
        config::{DATA, DF, YahooConfig},
        data::yahoo::{YahooResponse, normalize_chart},
        domain::Candle,
    },
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    reqwest::{Client, Url},
    std::time::Duration,
};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the configured lookback of daily candles for `symbol`, oldest first.
    async fn fetch_candles(&self, symbol: &str) -> Result<Vec<Candle>>;

    fn name(&self) -> &'static str;
}

/// Daily bars from the Yahoo Finance chart API.
pub struct YahooProvider {
    http: Client,
    config: &'static YahooConfig,
}

impl YahooProvider {
    pub fn new() -> Result<Self> {
        Self::with_config(&DATA.yahoo)
    }

    pub fn with_config(config: &'static YahooConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    fn chart_url(&self, symbol: &str) -> Result<Url> {
        let mut url = Url::parse(self.config.base_url)
            .with_context(|| format!("invalid base url {}", self.config.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("base url cannot carry a path"))?
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("range", self.config.range)
            .append_pair("interval", self.config.interval);
        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch_candles(&self, symbol: &str) -> Result<Vec<Candle>> {
        if symbol.trim().is_empty() {
            bail!("empty symbol");
        }
        let url = self.chart_url(symbol)?;

        if DF.log_fetch {
            log::info!("GET {}", url);
        }

        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("{}: request failed", symbol))?;
        let status = response.status();

        // Yahoo reports unknown tickers as a JSON error body with a 404 status,
        // so decode before judging the status code.
        let body: YahooResponse = response
            .json()
            .await
            .with_context(|| format!("{}: undecodable chart response (HTTP {})", symbol, status))?;
        let candles = normalize_chart(body).with_context(|| format!("{}: bad chart payload", symbol))?;

        if !status.is_success() {
            bail!("{}: HTTP {}", symbol, status);
        }
        Ok(candles)
    }

    fn name(&self) -> &'static str {
        "Yahoo Finance"
    }
}
