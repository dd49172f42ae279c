//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to time step)
    pub candle_wick_width: f32, // Pixels

    // --- SNIPER MARKERS ---
    pub buy_marker_color: Color32,
    pub sell_marker_color: Color32,
    /// Marker radius in points
    pub marker_radius: f32,

    // --- ZONE LEVEL LINES ---
    pub support_line_color: Color32,
    pub resistance_line_color: Color32,
    pub zone_line_width: f32,
    pub zone_line_opacity: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_height: f32,

    // --- SIGNAL BANDS ---
    pub color_band_red: Color32,
    pub color_band_yellow: Color32,
    pub color_band_green: Color32,

    // --- SEMANTIC COLORS ---
    pub color_warning: Color32,
    pub color_loss: Color32,
    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.8, // 80% width leaves a small gap between candles
    candle_wick_width: 1.0,

    // Triangles: pure green for buys, pure red for sells
    buy_marker_color: Color32::from_rgb(0, 255, 0),
    sell_marker_color: Color32::from_rgb(255, 0, 0),
    marker_radius: 7.5,

    support_line_color: Color32::from_rgb(34, 139, 34), // Forest Green
    resistance_line_color: Color32::from_rgb(178, 34, 34), // Firebrick Red
    zone_line_width: 1.0,
    zone_line_opacity: 0.45,

    plot_y_padding_pct: 0.03,
    plot_height: 500.0,

    color_band_red: Color32::from_rgb(255, 80, 80),
    color_band_yellow: Color32::from_rgb(255, 215, 0),
    color_band_green: Color32::from_rgb(100, 255, 100),

    color_warning: Color32::from_rgb(255, 215, 0), // Gold/Yellow
    color_loss: Color32::from_rgb(255, 80, 80),
    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
