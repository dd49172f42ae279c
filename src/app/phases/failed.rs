use eframe::egui::Context;

use crate::app::{App, AppState, FailedState, phases::PhaseView};

impl PhaseView for FailedState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.render_failure(ctx, &self.message);
        AppState::Failed(self.clone())
    }
}
