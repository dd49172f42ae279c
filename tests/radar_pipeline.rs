use {
    agent_sniper::{
        MarketData, MarketDataProvider, build_report,
        config::SNIPER,
        data::BarCache,
        domain::Candle,
        utils::TimeUtils,
    },
    anyhow::{Result, bail},
    async_trait::async_trait,
    std::{
        collections::HashMap,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    },
};

/// In-memory provider that counts round-trips.
struct StubProvider {
    data: HashMap<String, Vec<Candle>>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    async fn fetch_candles(&self, symbol: &str) -> Result<Vec<Candle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.data.get(symbol) {
            Some(candles) => Ok(candles.clone()),
            None => bail!("unknown symbol {}", symbol),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn wave(bars: usize) -> Vec<Candle> {
    let mut prev_close = 100.0;
    (0..bars)
        .map(|i| {
            let close = 100.0 + 10.0 * (i as f64 * 0.3).sin();
            let open = prev_close;
            prev_close = close;
            Candle::new(
                i as i64 * TimeUtils::MS_IN_D,
                open,
                open.max(close) + 1.0,
                open.min(close) - 1.0,
                close,
            )
        })
        .collect()
}

fn market(data: Vec<(&str, Vec<Candle>)>) -> (MarketData, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = StubProvider {
        data: data
            .into_iter()
            .map(|(s, c)| (s.to_string(), c))
            .collect(),
        calls: calls.clone(),
    };
    let market = MarketData::with_cache(Box::new(provider), BarCache::new(Duration::from_secs(60)));
    (market, calls)
}

fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn unavailable_symbols_are_skipped_silently() {
    let (mut market, _) = market(vec![
        ("BTC-USD", wave(63)),
        ("SHORT", wave(30)),
        ("EDGE", wave(31)),
    ]);

    let (report, _) = build_report(
        &mut market,
        &symbols(&["BTC-USD", "SHORT", "MISSING", "EDGE"]),
        None,
        &SNIPER,
    )
    .await;

    let rows: Vec<&str> = report.rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(rows, vec!["BTC-USD", "EDGE"]);
    assert_eq!(report.skipped, vec!["SHORT", "MISSING"]);
}

#[tokio::test]
async fn rows_carry_last_close_and_a_known_score() {
    let candles = wave(63);
    let last_close = candles.last().map(|c| c.close_price).unwrap_or_default();
    let (mut market, _) = market(vec![("GC=F", candles)]);

    let (report, _) = build_report(&mut market, &symbols(&["GC=F"]), None, &SNIPER).await;

    let record = &report.rows[0].record;
    assert_eq!(record.price, last_close);
    assert!([20, 40, 50, 60, 80].contains(&record.score));
    let rsi = record.rsi.expect("63 bars give a defined RSI");
    assert!((0.0..=100.0).contains(&rsi));
}

#[tokio::test]
async fn cache_serves_repeat_lookups_until_cleared() {
    let (mut market, calls) = market(vec![("ETH-USD", wave(40))]);

    assert!(market.series_for("ETH-USD").await.is_some());
    assert!(market.series_for("ETH-USD").await.is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    market.clear_cache();
    assert!(market.series_for("ETH-USD").await.is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let (mut market, calls) = market(vec![("SHORT", wave(10))]);

    assert!(market.series_for("SHORT").await.is_none());
    assert!(market.series_for("SHORT").await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(market.cache().is_empty());
}

#[tokio::test]
async fn provider_rows_are_sorted_and_deduplicated() {
    let mut candles = wave(40);
    candles.reverse();
    let mut dup = candles[0];
    dup.close_price += 5.0;
    candles.push(dup);

    let (mut market, _) = market(vec![("SOL-USD", candles)]);
    let series = market.series_for("SOL-USD").await.expect("enough bars");

    assert_eq!(series.klines(), 40);
    assert!(series.timestamps.windows(2).all(|w| w[0] < w[1]));
    // Later duplicate wins.
    assert_eq!(series.close_prices.last().copied(), Some(dup.close_price));
}

#[tokio::test]
async fn chart_symbol_gets_full_analysis() {
    let (mut market, calls) = market(vec![("BTC-USD", wave(63)), ("GC=F", wave(63))]);

    let (report, chart) =
        build_report(&mut market, &symbols(&["BTC-USD"]), Some("GC=F"), &SNIPER).await;

    assert_eq!(report.rows.len(), 1);
    let chart = chart.expect("chart symbol has data");
    assert_eq!(chart.symbol, "GC=F");
    assert_eq!(chart.analysis.series.klines(), 63);
    assert_eq!(chart.analysis.rsi.len(), 63);
    assert!(!chart.analysis.levels.supports.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // Chart symbol inside the selection reuses the table's fetch.
    let (_, chart) =
        build_report(&mut market, &symbols(&["BTC-USD"]), Some("BTC-USD"), &SNIPER).await;
    assert_eq!(chart.map(|c| c.symbol), Some("BTC-USD".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn short_history_chart_symbol_has_no_chart() {
    let (mut market, _) = market(vec![("BTC-USD", wave(63)), ("SHORT", wave(30))]);

    let (report, chart) =
        build_report(&mut market, &symbols(&["BTC-USD"]), Some("SHORT"), &SNIPER).await;

    assert!(chart.is_none());
    let rows: Vec<&str> = report.rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(rows, vec!["BTC-USD"]);
}
