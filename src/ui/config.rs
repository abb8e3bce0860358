use eframe::egui::Color32;

use crate::domain::PageFilter;
use crate::utils::app_time::AppInstant;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct UiColors {
    pub page: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub text: Color32,
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub primary: Color32,
    pub primary_text: Color32,
    pub secondary: Color32,
    pub secondary_text: Color32,
    pub modal_body: Color32,
}

impl UiColors {
    /// Every colour run through the page filter at `now`
    pub fn filtered(&self, filter: &PageFilter, now: AppInstant) -> Self {
        let f = |c: Color32| filter.apply(c, now);
        Self {
            page: f(self.page),
            card: f(self.card),
            card_border: f(self.card_border),
            text: f(self.text),
            label: f(self.label),
            heading: f(self.heading),
            subsection_heading: f(self.subsection_heading),
            primary: f(self.primary),
            primary_text: f(self.primary_text),
            secondary: f(self.secondary),
            secondary_text: f(self.secondary_text),
            modal_body: f(self.modal_body),
        }
    }
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Width of the centred page column
    pub content_width: f32,
    pub section_spacing: f32,
    pub card_radius: u8,
    /// Scale of the buy button while it shows pressed feedback
    pub pressed_scale: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        page: Color32::from_rgb(0xfa, 0xf7, 0xf2),
        card: Color32::WHITE,
        card_border: Color32::from_rgb(0xe8, 0xe2, 0xd9),
        text: Color32::from_rgb(0x1a, 0x1a, 0x1a),
        label: Color32::from_rgb(0x6c, 0x6c, 0x6c),
        heading: Color32::from_rgb(0x00, 0x4e, 0x89),
        subsection_heading: Color32::from_rgb(0xff, 0x6b, 0x35),
        primary: Color32::from_rgb(0xff, 0x6b, 0x35),
        primary_text: Color32::WHITE,
        secondary: Color32::from_rgb(0xff, 0xd2, 0x3f),
        secondary_text: Color32::from_rgb(0x1a, 0x1a, 0x1a),
        modal_body: Color32::WHITE,
    },
    content_width: 900.0,
    section_spacing: 36.0,
    card_radius: 12,
    pressed_scale: 0.95,
};
