use {
    crate::{
        analysis::SymbolAnalysis,
        config::PLOT_CONFIG,
        models::OhlcvTimeSeries,
        ui::{
            UI_TEXT,
            plot_layers::{
                CandlestickLayer, LayerContext, MarkerLayer, PlotLayer, PlotVisibility,
                ZoneLinesLayer,
            },
        },
        utils::epoch_ms_to_date_string,
    },
    eframe::egui::Ui,
    egui_plot::{Axis, AxisHints, Corner, Legend, Plot, VPlacement},
};

// X is the bar index; labels only on whole bars.
fn create_time_axis(series: &OhlcvTimeSeries) -> AxisHints<'static> {
    let timestamps = series.timestamps.clone();

    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                return String::new();
            }
            timestamps
                .get(rounded as usize)
                .map(|&ts| epoch_ms_to_date_string(ts))
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn calculate_y_bounds(series: &OhlcvTimeSeries) -> Option<std::ops::RangeInclusive<f64>> {
    let (low, high) = series.price_bounds()?;
    let pad = (high - low) * PLOT_CONFIG.plot_y_padding_pct;
    Some((low - pad).max(0.0)..=(high + pad))
}

#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    pub fn show_sniper_plot(
        &mut self,
        ui: &mut Ui,
        analysis: &SymbolAnalysis,
        visibility: &PlotVisibility,
    ) {
        let series = &analysis.series;
        let bar_count = series.klines() as f64;

        Plot::new(format!("sniper_plot_{}", analysis.symbol()))
            .height(PLOT_CONFIG.plot_height)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_time_axis(series)])
            .y_axis_label(UI_TEXT.plot_y_axis.as_str())
            .show_background(true)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-1.0..=bar_count);
                if let Some(y_range) = calculate_y_bounds(series) {
                    plot_ui.set_plot_bounds_y(y_range);
                }

                let ctx = LayerContext { analysis };

                let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(3);
                if visibility.zones {
                    layers.push(Box::new(ZoneLinesLayer));
                }
                if visibility.candles {
                    layers.push(Box::new(CandlestickLayer));
                }
                if visibility.markers {
                    layers.push(Box::new(MarkerLayer));
                }

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::domain::Candle};

    #[test]
    fn y_bounds_pad_the_price_range() {
        let series = OhlcvTimeSeries::from_candles(
            "X",
            vec![
                Candle::new(0, 100.0, 110.0, 90.0, 105.0),
                Candle::new(1, 105.0, 120.0, 100.0, 118.0),
            ],
        );
        let range = calculate_y_bounds(&series).expect("bounds");
        assert!(*range.start() < 90.0);
        assert!(*range.end() > 120.0);
    }

    #[test]
    fn empty_series_has_no_bounds() {
        let series = OhlcvTimeSeries::from_candles("X", Vec::new());
        assert!(calculate_y_bounds(&series).is_none());
    }
}
