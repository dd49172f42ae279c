use {
    super::messages::{JobRequest, JobResult},
    crate::{
        analysis::analyze_symbol,
        config::SniperConfig,
        data::MarketData,
        models::{ChartData, RadarReport, ReportRow},
        utils::AppInstant,
    },
    itertools::Itertools,
    std::{
        sync::mpsc::{Receiver, Sender},
        thread,
    },
    tokio::runtime::Builder,
};

/// Spawns the background thread that owns the market data service.
/// The thread exits once the request channel closes.
pub fn spawn_worker_thread(
    market: MarketData,
    config: SniperConfig,
    rx: Receiver<JobRequest>,
    tx: Sender<JobResult>,
) {
    thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Worker: failed to start async runtime: {}", e);
                return;
            }
        };
        let mut market = market;

        while let Ok(req) = rx.recv() {
            let result = runtime.block_on(process_request(&mut market, &config, req));
            if tx.send(result).is_err() {
                break;
            }
        }
        log::info!("Worker: request channel closed, exiting");
    });
}

pub async fn process_request(
    market: &mut MarketData,
    config: &SniperConfig,
    req: JobRequest,
) -> JobResult {
    let start = AppInstant::now();

    if req.clear_cache {
        market.clear_cache();
    }

    let (report, chart) = crate::trace_time!(
        &format!("Radar refresh [{} symbols]", req.symbols.len()),
        500_000,
        { build_report(market, &req.symbols, req.chart_symbol.as_deref(), config).await }
    );

    JobResult {
        report,
        chart,
        duration_ms: start.elapsed().as_millis(),
    }
}

/// One sequential pass over `symbols`: fetch, analyze, score.
/// Unavailable symbols are left out of the rows and listed in `skipped`.
pub async fn build_report(
    market: &mut MarketData,
    symbols: &[String],
    chart_symbol: Option<&str>,
    config: &SniperConfig,
) -> (RadarReport, Option<ChartData>) {
    let mut report = RadarReport {
        generated_at_ms: chrono::Utc::now().timestamp_millis(),
        ..Default::default()
    };
    let mut chart = None;

    for symbol in symbols.iter().unique() {
        let Some(analysis) = fetch_and_analyze(market, symbol, config).await else {
            report.skipped.push(symbol.clone());
            continue;
        };

        report.rows.push(ReportRow {
            symbol: symbol.clone(),
            record: analysis.record,
        });

        if chart_symbol == Some(symbol.as_str()) {
            chart = Some(ChartData {
                symbol: symbol.clone(),
                analysis,
            });
        }
    }

    // Chart may point at a symbol outside the table selection.
    if chart.is_none() {
        if let Some(symbol) = chart_symbol.filter(|s| !symbols.iter().any(|x| x == s)) {
            chart = fetch_and_analyze(market, symbol, config)
                .await
                .map(|analysis| ChartData {
                    symbol: symbol.to_string(),
                    analysis,
                });
        }
    }

    (report, chart)
}

async fn fetch_and_analyze(
    market: &mut MarketData,
    symbol: &str,
    config: &SniperConfig,
) -> Option<crate::analysis::SymbolAnalysis> {
    let series = market.series_for(symbol).await?;
    analyze_symbol(series, config)
}
