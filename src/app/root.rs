use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{AppState, FailedState, RunningState, phases::PhaseView},
    config::{DF, PLOT_CONFIG, SYMBOLS},
    data::YahooProvider,
    engine::RadarEngine,
    ui::{PlotView, PlotVisibility, UI_CONFIG, UI_TEXT},
    utils::AppInstant,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    /// Symbols shown in the radar table, in picker order.
    pub(crate) selected_symbols: Vec<String>,
    pub(crate) auto_refresh: bool,
    pub(crate) chart_symbol: Option<String>,
    pub(crate) plot_visibility: PlotVisibility,
    #[serde(skip)]
    pub(crate) engine: Option<RadarEngine>,
    #[serde(skip)]
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    pub(crate) pending_refresh: Option<bool>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected_symbols: SYMBOLS
                .default_selection
                .iter()
                .map(|s| s.to_string())
                .collect(),
            auto_refresh: false,
            chart_symbol: None,
            plot_visibility: PlotVisibility::default(),
            engine: None,
            plot_view: PlotView::new(),
            pending_refresh: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.apply_cli(&args);
        app.plot_view = PlotView::new();
        app.state = AppState::default();
        app
    }

    /// Command line flags win over persisted state.
    pub(crate) fn apply_cli(&mut self, args: &Cli) {
        if let Some(symbols) = &args.symbols {
            self.selected_symbols = symbols.clone();
        }
        if args.auto_refresh {
            self.auto_refresh = true;
        }
        if let Some(chart) = &args.chart {
            self.chart_symbol = Some(chart.clone());
        }
        self.ensure_valid_chart_symbol();
    }

    /// Picker entries: the fixed universe plus anything extra the user selected.
    pub(crate) fn available_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = SYMBOLS.available.iter().map(|s| s.to_string()).collect();
        for s in &self.selected_symbols {
            if !symbols.contains(s) {
                symbols.push(s.clone());
            }
        }
        symbols
    }

    /// Select or deselect a symbol, keeping the picker order.
    pub(crate) fn set_symbol_selected(&mut self, symbol: &str, selected: bool) {
        let available = self.available_symbols();
        let mut chosen: Vec<String> = available
            .into_iter()
            .filter(|s| {
                if s == symbol {
                    selected
                } else {
                    self.selected_symbols.contains(s)
                }
            })
            .collect();
        if selected && !chosen.iter().any(|s| s == symbol) {
            chosen.push(symbol.to_string());
        }
        self.selected_symbols = chosen;
        self.ensure_valid_chart_symbol();
    }

    /// The chart can only show one of the selected symbols.
    pub(crate) fn ensure_valid_chart_symbol(&mut self) {
        let valid = self
            .chart_symbol
            .as_ref()
            .is_some_and(|c| self.selected_symbols.contains(c));
        if !valid {
            let fallback = self.selected_symbols.first().cloned();
            #[cfg(debug_assertions)]
            if DF.log_selection {
                log::info!(
                    "Chart symbol {:?} not selected; falling back to {:?}",
                    self.chart_symbol,
                    fallback
                );
            }
            self.chart_symbol = fallback;
        }
    }

    /// Ask for a refresh at the end of this frame. `clear_cache` is sticky.
    pub(crate) fn queue_refresh(&mut self, clear_cache: bool) {
        let prev = self.pending_refresh.unwrap_or(false);
        self.pending_refresh = Some(prev || clear_cache);
    }

    fn dispatch_pending_refresh(&mut self) {
        let Some(clear_cache) = self.pending_refresh.take() else {
            return;
        };
        if self.selected_symbols.is_empty() {
            return;
        }
        if let Some(e) = &mut self.engine {
            e.request_refresh(
                self.selected_symbols.clone(),
                self.chart_symbol.clone(),
                clear_cache,
            );
        }
    }

    pub(crate) fn tick_bootstrap_state(&mut self, ctx: &Context) -> AppState {
        let provider = match YahooProvider::new() {
            Ok(p) => p,
            Err(e) => {
                log::error!("Cannot start market data provider: {:#}", e);
                return AppState::Failed(FailedState {
                    message: format!("{:#}", e),
                });
            }
        };

        self.engine = Some(RadarEngine::new(Box::new(provider)));
        self.queue_refresh(false);
        ctx.request_repaint();
        AppState::Running(RunningState)
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let start = AppInstant::now();

        if let Some(e) = &mut self.engine {
            e.update();
            // Timer ticks want fresh bars, not the entries cached by the previous tick.
            if self.auto_refresh && e.is_refresh_due() {
                self.queue_refresh(true);
            }
        }
        let engine_time = start.elapsed().as_micros();

        let start = AppInstant::now();
        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        let render_time = start.elapsed().as_micros();

        self.dispatch_pending_refresh();
        self.schedule_repaint(ctx);

        if engine_time + render_time > 500_000 && DF.log_performance {
            log::warn!(
                "🐢 SLOW FRAME: Engine: {}us | Render: {}us",
                engine_time,
                render_time
            );
        }
    }

    // Results arrive on a channel, so keep polling while work is outstanding.
    fn schedule_repaint(&self, ctx: &Context) {
        let Some(e) = &self.engine else { return };
        if e.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if self.auto_refresh {
            ctx.request_repaint_after(e.time_until_refresh().max(Duration::from_millis(250)));
        }
    }

    pub(crate) fn render_failure(&self, ctx: &Context, message: &str) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.heading(&UI_TEXT.page_title);
                ui.add_space(10.0);
                ui.label(RichText::new(message).color(PLOT_CONFIG.color_loss));
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "💾 SAVE [App]: symbols = {:?}, chart = {:?}",
                self.selected_symbols,
                self.chart_symbol
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(symbols: Option<&[&str]>, chart: Option<&str>) -> Cli {
        Cli {
            symbols: symbols.map(|s| s.iter().map(|x| x.to_string()).collect()),
            auto_refresh: false,
            chart: chart.map(str::to_string),
        }
    }

    #[test]
    fn defaults_match_the_command_panel() {
        let app = App::default();
        assert_eq!(app.selected_symbols, vec!["BTC-USD", "EURUSD=X"]);
        assert!(!app.auto_refresh);
    }

    #[test]
    fn toggling_keeps_picker_order() {
        let mut app = App::default();
        app.set_symbol_selected("GC=F", true);
        app.set_symbol_selected("ETH-USD", true);
        assert_eq!(
            app.selected_symbols,
            vec!["BTC-USD", "ETH-USD", "EURUSD=X", "GC=F"]
        );

        app.set_symbol_selected("BTC-USD", false);
        assert_eq!(app.selected_symbols, vec!["ETH-USD", "EURUSD=X", "GC=F"]);
    }

    #[test]
    fn chart_symbol_follows_selection() {
        let mut app = App::default();
        app.ensure_valid_chart_symbol();
        assert_eq!(app.chart_symbol.as_deref(), Some("BTC-USD"));

        app.set_symbol_selected("BTC-USD", false);
        assert_eq!(app.chart_symbol.as_deref(), Some("EURUSD=X"));

        app.set_symbol_selected("EURUSD=X", false);
        assert_eq!(app.chart_symbol, None);
    }

    #[test]
    fn cli_overrides_selection_and_chart() {
        let mut app = App::default();
        app.apply_cli(&cli(Some(&["SOL-USD", "^GSPC"]), Some("^GSPC")));
        assert_eq!(app.selected_symbols, vec!["SOL-USD", "^GSPC"]);
        assert_eq!(app.chart_symbol.as_deref(), Some("^GSPC"));
        assert!(app.available_symbols().contains(&"^GSPC".to_string()));
    }

    #[test]
    fn clear_cache_request_is_sticky_within_a_frame() {
        let mut app = App::default();
        app.queue_refresh(true);
        app.queue_refresh(false);
        assert_eq!(app.pending_refresh, Some(true));
    }
}
