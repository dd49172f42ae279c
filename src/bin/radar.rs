//! Headless probability radar: prints the score table (and optionally the sniper
//! entries of one symbol) to the terminal.

use {
    agent_sniper::{
        Cli, MarketData, YahooProvider, build_report,
        analysis::SymbolAnalysis,
        config::{DATA, SNIPER, SYMBOLS},
        models::{ChartData, Marker, RadarReport},
        utils::epoch_ms_to_date_string,
    },
    anyhow::Result,
    clap::Parser,
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Tabled)]
struct RadarLine {
    #[tabled(rename = "Ativo")]
    symbol: String,
    #[tabled(rename = "Preço")]
    price: String,
    #[tabled(rename = "RSI")]
    rsi: String,
    #[tabled(rename = "Sinal")]
    signal: String,
    #[tabled(rename = "Score")]
    score: i32,
}

#[derive(Tabled)]
struct MarkerLine {
    #[tabled(rename = "Data")]
    date: String,
    #[tabled(rename = "Tipo")]
    kind: &'static str,
    #[tabled(rename = "Preço")]
    price: String,
}

fn print_report(report: &RadarReport) {
    let lines: Vec<RadarLine> = report
        .rows
        .iter()
        .map(|row| RadarLine {
            symbol: row.symbol.clone(),
            price: row.record.price_text(),
            rsi: row.record.rsi_text(),
            signal: row.record.signal_label(),
            score: row.record.score,
        })
        .collect();

    println!(
        "\n📡 Radar de Probabilidade ({})",
        epoch_ms_to_date_string(report.generated_at_ms)
    );
    println!("{}", Table::new(lines).with(Style::rounded()));

    if !report.skipped.is_empty() {
        println!("Sem dados: {}", report.skipped.join(", "));
    }
}

fn marker_lines(analysis: &SymbolAnalysis) -> Vec<MarkerLine> {
    let to_line = |m: &Marker, kind| MarkerLine {
        date: epoch_ms_to_date_string(m.timestamp_ms),
        kind,
        price: format!("{:.2}", m.price),
    };

    let mut lines: Vec<(i64, MarkerLine)> = analysis
        .markers
        .buys
        .iter()
        .map(|m| (m.timestamp_ms, to_line(m, "COMPRA SNIPER")))
        .chain(
            analysis
                .markers
                .sells
                .iter()
                .map(|m| (m.timestamp_ms, to_line(m, "VENDA SNIPER"))),
        )
        .collect();
    lines.sort_by_key(|(ts, _)| *ts);
    lines.into_iter().map(|(_, line)| line).collect()
}

fn print_chart(symbol: &str, chart: Option<&ChartData>) {
    println!("\nGráfico Sniper: {}", symbol);
    let Some(chart) = chart else {
        println!("Sem dados suficientes para este ativo.");
        return;
    };

    let levels = &chart.analysis.levels;
    println!(
        "{} fundos / {} topos detectados em {} candles",
        levels.supports.len(),
        levels.resistances.len(),
        chart.analysis.series.klines()
    );

    let lines = marker_lines(&chart.analysis);
    if lines.is_empty() {
        println!("Nenhum sinal sniper no período.");
    } else {
        println!("{}", Table::new(lines).with(Style::rounded()));
    }
}

async fn run_cycle(market: &mut MarketData, symbols: &[String], chart: Option<&str>) {
    let (report, chart_data) = build_report(market, symbols, chart, &SNIPER).await;
    print_report(&report);
    if let Some(symbol) = chart {
        print_chart(symbol, chart_data.as_ref());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("agent_sniper"), my_code_level)
        .filter(Some("radar"), my_code_level)
        .init();

    let args = Cli::parse();
    let symbols: Vec<String> = args.symbols.clone().unwrap_or_else(|| {
        SYMBOLS
            .default_selection
            .iter()
            .map(|s| s.to_string())
            .collect()
    });

    if symbols.is_empty() {
        println!("Selecione pelo menos um ativo (--symbols).");
        return Ok(());
    }

    let mut market = MarketData::new(Box::new(YahooProvider::new()?));
    log::info!(
        "Radar started for {:?} via {}",
        symbols,
        market.provider_name()
    );

    if !args.auto_refresh {
        run_cycle(&mut market, &symbols, args.chart.as_deref()).await;
        return Ok(());
    }

    // First tick fires immediately.
    let mut ticker = tokio::time::interval(DATA.auto_refresh_interval);
    loop {
        ticker.tick().await;
        run_cycle(&mut market, &symbols, args.chart.as_deref()).await;
        market.clear_cache();
    }
}
