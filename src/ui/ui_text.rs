use std::sync::LazyLock;

pub const ICON_LION: &str = "🦁";
pub const ICON_RADAR: &str = "📡";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_HOURGLASS: &str = "⏳";

pub struct UiText {
    // --- Headings ---
    pub page_title: String,
    pub sidebar_heading: String,
    pub radar_heading: String,

    // --- Side panel ---
    pub sp_symbols: String,
    pub sp_auto_refresh: String,
    pub sp_refresh_now: String,
    pub sp_show_zones: String,
    pub sp_next_refresh: String,
    pub sp_last_job: String,

    // --- Radar table ---
    pub col_symbol: String,
    pub col_price: String,
    pub col_rsi: String,
    pub col_signal: String,
    pub col_score: String,
    pub warn_no_selection: String,
    pub label_loading: String,
    pub label_skipped: String,

    // --- Chart ---
    pub chart_selector: String,
    pub chart_title_prefix: String,
    pub chart_no_data: String,
    pub legend_buy: String,
    pub legend_sell: String,
    pub legend_support: String,
    pub legend_resistance: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    page_title: format!("{} A.G.E.N.T. - Monitoramento Ao Vivo", ICON_LION),
    sidebar_heading: "Painel de Comando".to_string(),
    radar_heading: format!("{} Radar de Probabilidade", ICON_RADAR),

    sp_symbols: "Ativos".to_string(),
    sp_auto_refresh: "Atualizar Automaticamente (60s)".to_string(),
    sp_refresh_now: format!("{} Atualizar Agora", ICON_REFRESH),
    sp_show_zones: "Mostrar Zonas".to_string(),
    sp_next_refresh: "Próxima atualização".to_string(),
    sp_last_job: "Último ciclo".to_string(),

    col_symbol: "Ativo".to_string(),
    col_price: "Preço".to_string(),
    col_rsi: "RSI".to_string(),
    col_signal: "Sinal".to_string(),
    col_score: "Score".to_string(),
    warn_no_selection: format!(
        "{} Selecione pelo menos um ativo na barra lateral.",
        ICON_WARNING
    ),
    label_loading: format!("{} Carregando dados...", ICON_HOURGLASS),
    label_skipped: "Sem dados".to_string(),

    chart_selector: "Escolha um ativo para ver o Gráfico Sniper:".to_string(),
    chart_title_prefix: "Gráfico Sniper:".to_string(),
    chart_no_data: "Sem dados suficientes para este ativo.".to_string(),
    legend_buy: "COMPRA SNIPER".to_string(),
    legend_sell: "VENDA SNIPER".to_string(),
    legend_support: "Fundos".to_string(),
    legend_resistance: "Topos".to_string(),
    plot_x_axis: "Data".to_string(),
    plot_y_axis: "Preço".to_string(),
});
