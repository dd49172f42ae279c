use {
    crate::{
        app::App,
        config::PLOT_CONFIG,
        models::ReportRow,
        ui::{BandColor, UI_CONFIG, UI_TEXT, UiStyleExt},
        utils::format_duration,
    },
    eframe::egui::{
        CentralPanel, ComboBox, Context, Grid, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui,
    },
};

impl App {
    pub(crate) fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::left("command_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .exact_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(&UI_TEXT.sidebar_heading);
                ui.separator();

                ui.label_subheader(&UI_TEXT.sp_symbols);
                for symbol in self.available_symbols() {
                    let mut selected = self.selected_symbols.contains(&symbol);
                    if ui.checkbox(&mut selected, &symbol).changed() {
                        self.set_symbol_selected(&symbol, selected);
                        self.queue_refresh(false);
                    }
                }

                ui.add_space(8.0);
                ui.separator();

                if ui
                    .checkbox(&mut self.auto_refresh, &UI_TEXT.sp_auto_refresh)
                    .changed()
                    && self.auto_refresh
                {
                    self.queue_refresh(false);
                }

                if ui.button(&UI_TEXT.sp_refresh_now).clicked() {
                    self.queue_refresh(true);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.checkbox(&mut self.plot_visibility.zones, &UI_TEXT.sp_show_zones);
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                let Some(engine) = &self.engine else { return };
                ui.horizontal(|ui| {
                    if let Some(ms) = engine.last_duration_ms {
                        ui.metric(
                            &UI_TEXT.sp_last_job,
                            &format!("{} ms", ms),
                            PLOT_CONFIG.color_text_neutral,
                        );
                    }
                    if self.auto_refresh && engine.has_refreshed() {
                        ui.separator();
                        ui.metric(
                            &UI_TEXT.sp_next_refresh,
                            &format_duration(engine.time_until_refresh().as_millis() as i64),
                            PLOT_CONFIG.color_text_neutral,
                        );
                    }
                    if engine.is_busy() {
                        ui.separator();
                        ui.spinner();
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.heading(RichText::new(&UI_TEXT.page_title).color(UI_CONFIG.colors.heading));
                ui.add_space(6.0);

                if self.selected_symbols.is_empty() {
                    ui.label_warning(&UI_TEXT.warn_no_selection);
                    return;
                }

                ScrollArea::vertical().show(ui, |ui| {
                    self.render_radar_table(ui);
                    ui.add_space(8.0);
                    ui.separator();
                    self.render_chart_section(ui);
                });
            });
    }

    fn render_radar_table(&self, ui: &mut Ui) {
        ui.label_subheader(&UI_TEXT.radar_heading);
        let Some(engine) = &self.engine else { return };

        if !engine.has_refreshed() || (engine.report.rows.is_empty() && engine.is_busy()) {
            ui.label_subdued(&UI_TEXT.label_loading);
            return;
        }

        Grid::new("radar_table")
            .striped(true)
            .min_col_width(UI_CONFIG.table_min_col_width)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in [
                    &UI_TEXT.col_symbol,
                    &UI_TEXT.col_price,
                    &UI_TEXT.col_rsi,
                    &UI_TEXT.col_signal,
                    &UI_TEXT.col_score,
                ] {
                    ui.label(RichText::new(header).strong().color(PLOT_CONFIG.color_text_primary));
                }
                ui.end_row();

                for row in &engine.report.rows {
                    render_report_row(ui, row);
                    ui.end_row();
                }
            });

        if !engine.report.skipped.is_empty() {
            ui.add_space(4.0);
            ui.label_subdued(format!(
                "{}: {}",
                UI_TEXT.label_skipped,
                engine.report.skipped.join(", ")
            ));
        }
    }

    fn render_chart_section(&mut self, ui: &mut Ui) {
        let selected = self.chart_symbol.clone().unwrap_or_default();

        ComboBox::from_label(&UI_TEXT.chart_selector)
            .selected_text(&selected)
            .show_ui(ui, |ui| {
                for symbol in &self.selected_symbols {
                    let is_current = *symbol == selected;
                    if ui.selectable_label(is_current, symbol).clicked() && !is_current {
                        self.chart_symbol = Some(symbol.clone());
                        self.pending_refresh.get_or_insert(false);
                    }
                }
            });

        let Some(chart_symbol) = self.chart_symbol.clone() else { return };

        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("{} {}", UI_TEXT.chart_title_prefix, chart_symbol))
                .heading()
                .color(PLOT_CONFIG.color_text_primary),
        );

        let Some(engine) = &self.engine else { return };
        match &engine.chart {
            Some(chart) if chart.symbol == chart_symbol => {
                self.plot_view
                    .show_sniper_plot(ui, &chart.analysis, &self.plot_visibility);
            }
            _ if engine.is_busy() => ui.label_subdued(&UI_TEXT.label_loading),
            _ => ui.label_subdued(&UI_TEXT.chart_no_data),
        }
    }
}

fn render_report_row(ui: &mut Ui, row: &ReportRow) {
    let record = &row.record;
    ui.label(RichText::new(&row.symbol).strong());
    ui.label(record.price_text());
    ui.label(record.rsi_text());
    ui.label(RichText::new(record.signal_label()).color(record.band.color()));
    ui.label(RichText::new(record.score.to_string()).color(record.band.color()));
}
