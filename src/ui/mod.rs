mod plot_layers;
mod styles;
mod ui_config;
mod ui_plot_view;
mod ui_render;
mod ui_text;

pub(crate) use plot_layers::PlotVisibility;
pub(crate) use styles::{BandColor, UiStyleExt, apply_opacity};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::PlotView;
