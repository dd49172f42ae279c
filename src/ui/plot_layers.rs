use {
    crate::{
        analysis::SymbolAnalysis,
        config::PLOT_CONFIG,
        domain::CandleType,
        models::Marker,
        ui::{UI_TEXT, apply_opacity},
    },
    eframe::egui::{Color32, Stroke},
    egui_plot::{HLine, Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points, Polygon},
};

/// Layer toggles shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlotVisibility {
    pub candles: bool,
    pub zones: bool,
    pub markers: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            candles: true,
            zones: false,
            markers: true,
        }
    }
}

pub struct LayerContext<'a> {
    pub analysis: &'a SymbolAnalysis,
}

impl LayerContext<'_> {
    /// Plot x coordinate (bar index) of a timestamp on the series.
    pub fn x_for(&self, timestamp_ms: i64) -> Option<f64> {
        self.analysis
            .series
            .timestamps
            .binary_search(&timestamp_ms)
            .ok()
            .map(|idx| idx as f64)
    }
}

pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (idx, candle) in ctx.analysis.series.candles().enumerate() {
            let x = idx as f64;
            let color = match candle.get_type() {
                CandleType::Bullish => PLOT_CONFIG.candle_bullish_color,
                CandleType::Bearish => PLOT_CONFIG.candle_bearish_color,
            };

            draw_wick_line(plot_ui, x, candle.high_price, candle.low_price, color);

            let (bottom, top) = candle.body_range();
            // Doji: give the body a sliver of height so it stays visible
            let top = if (top - bottom).abs() < f64::EPSILON {
                bottom * 1.0001
            } else {
                top
            };
            draw_body_rect(plot_ui, x, top, bottom, color);
        }
    }
}

fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

/// Dashed horizontal lines at every support / resistance level.
pub struct ZoneLinesLayer;

impl PlotLayer for ZoneLinesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let levels = &ctx.analysis.levels;
        let dash = LineStyle::Dashed { length: 6.0 };

        let groups = [
            (
                &levels.supports,
                &UI_TEXT.legend_support,
                PLOT_CONFIG.support_line_color,
            ),
            (
                &levels.resistances,
                &UI_TEXT.legend_resistance,
                PLOT_CONFIG.resistance_line_color,
            ),
        ];

        for (prices, name, color) in groups {
            let color = apply_opacity(color, PLOT_CONFIG.zone_line_opacity);
            for &price in prices.iter() {
                plot_ui.hline(
                    HLine::new(name.as_str(), price)
                        .color(color)
                        .style(dash)
                        .width(PLOT_CONFIG.zone_line_width),
                );
            }
        }
    }
}

/// Sniper entries: triangles under buys, over sells.
pub struct MarkerLayer;

impl MarkerLayer {
    fn to_points(ctx: &LayerContext, markers: &[Marker]) -> Vec<[f64; 2]> {
        markers
            .iter()
            .filter_map(|m| ctx.x_for(m.timestamp_ms).map(|x| [x, m.price]))
            .collect()
    }
}

impl PlotLayer for MarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let markers = &ctx.analysis.markers;

        let buys = Self::to_points(ctx, &markers.buys);
        plot_ui.points(
            Points::new(UI_TEXT.legend_buy.as_str(), PlotPoints::new(buys))
                .shape(MarkerShape::Up)
                .radius(PLOT_CONFIG.marker_radius)
                .color(PLOT_CONFIG.buy_marker_color)
                .filled(true),
        );

        let sells = Self::to_points(ctx, &markers.sells);
        plot_ui.points(
            Points::new(UI_TEXT.legend_sell.as_str(), PlotPoints::new(sells))
                .shape(MarkerShape::Down)
                .radius(PLOT_CONFIG.marker_radius)
                .color(PLOT_CONFIG.sell_marker_color)
                .filled(true),
        );
    }
}
