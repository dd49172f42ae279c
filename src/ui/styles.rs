use {
    crate::{config::PLOT_CONFIG, models::ColorBand, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait BandColor {
    fn color(&self) -> Color32;
}

impl BandColor for ColorBand {
    fn color(&self) -> Color32 {
        match self {
            Self::Red => PLOT_CONFIG.color_band_red,
            Self::Yellow => PLOT_CONFIG.color_band_yellow,
            Self::Green => PLOT_CONFIG.color_band_green,
        }
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(PLOT_CONFIG.color_warning));
    }
}
