//! Tooltip, modal and floating stat presentation settings.

use eframe::egui::Color32;

pub struct TooltipConfig {
    /// Minimum distance from every viewport edge
    pub viewport_margin: f32,
    /// Gap between the anchor and the tooltip
    pub anchor_gap: f32,
    pub max_width: f32,
    pub padding_x: i8,
    pub padding_y: i8,
    pub corner_radius: u8,
    pub font_size: f32,
    pub background: Color32,
    pub text_color: Color32,
}

pub const TOOLTIP_CONFIG: TooltipConfig = TooltipConfig {
    viewport_margin: 10.0,
    anchor_gap: 10.0,
    max_width: 300.0,
    padding_x: 15,
    padding_y: 10,
    corner_radius: 8,
    font_size: 14.0,
    background: Color32::from_rgb(0x1a, 0x1a, 0x1a),
    text_color: Color32::WHITE,
};

pub struct ModalConfig {
    /// Backdrop tint (black at 80%)
    pub backdrop: Color32,
    pub max_width: f32,
    /// Body scroll height as a fraction of the viewport height
    pub body_max_height_frac: f32,
    pub outer_margin: f32,
    pub corner_radius: u8,
    pub header_padding: i8,
    pub title_size: f32,
    pub close_size: f32,
    /// Round highlight behind the close button while hovered or focused (white at 20%)
    pub close_highlight: Color32,
    /// Slide-in start: vertical offset and scale the dialog grows from
    pub slide_from_px: f32,
    pub start_scale: f32,
}

pub const MODAL_CONFIG: ModalConfig = ModalConfig {
    backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 204),
    max_width: 600.0,
    body_max_height_frac: 0.6,
    outer_margin: 20.0,
    corner_radius: 12,
    header_padding: 20,
    title_size: 20.0,
    close_size: 24.0,
    close_highlight: Color32::from_rgba_premultiplied(51, 51, 51, 51),
    slide_from_px: -20.0,
    start_scale: 0.9,
};

pub struct FloatingStatConfig {
    /// Horizontal offset from the right edge when off-screen
    pub hidden_right: f32,
    /// Horizontal offset from the right edge while resting on screen
    pub visible_right: f32,
    /// Fraction of the animation spent sliding in (and, mirrored, sliding out)
    pub slide_fraction: f32,
    /// Vertical placement range, as a fraction of viewport height
    pub top_min_frac: f64,
    pub top_max_frac: f64,
    pub value_size: f32,
    pub label_size: f32,
}

pub const FLOATING_STAT_CONFIG: FloatingStatConfig = FloatingStatConfig {
    hidden_right: -200.0,
    visible_right: 20.0,
    slide_fraction: 0.15,
    top_min_frac: 0.15,
    top_max_frac: 0.85,
    value_size: 14.0,
    label_size: 12.0,
};

/// Orange to yellow, used by floating stats and the modal header
pub const BRAND_GRADIENT: &[&str] = &["#ff6b35", "#ffd23f"];
