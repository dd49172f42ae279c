use eframe::egui::Context;

use crate::app::{App, AppState};

pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
