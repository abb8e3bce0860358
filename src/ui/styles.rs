use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UiColors;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
///
/// Colours come in as a parameter because the whole palette shifts while the
/// page filter is active.
pub trait UiStyleExt {
    /// Renders small, muted text (hints under headings).
    fn label_subdued(&mut self, colors: &UiColors, text: impl Into<String>);

    /// Renders a "Label: Value" pair with the value in `color`.
    fn metric(&mut self, colors: &UiColors, label: &str, value: &str, color: Color32);

    /// Renders a section header.
    fn label_header(&mut self, colors: &UiColors, text: impl Into<String>);

    /// Renders a sub-section header.
    fn label_subheader(&mut self, colors: &UiColors, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, colors: &UiColors, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(colors.label));
    }

    fn metric(&mut self, colors: &UiColors, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(format!("{}:", label)).color(colors.label));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_header(&mut self, colors: &UiColors, text: impl Into<String>) {
        self.heading(RichText::new(text).strong().size(28.0).color(colors.heading));
    }

    fn label_subheader(&mut self, colors: &UiColors, text: impl Into<String>) {
        self.label(RichText::new(text).strong().color(colors.subsection_heading));
    }
}
