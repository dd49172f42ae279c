use eframe::egui::Context;

use crate::app::{App, AppState, BootstrapState, phases::PhaseView};

impl PhaseView for BootstrapState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_bootstrap_state(ctx)
    }
}
