//! Easter egg configuration

use eframe::egui::Key;

/// Number of keys kept in the rolling buffer
pub const KONAMI_BUFFER_LEN: usize = 10;

pub const KONAMI_SEQUENCE: [Key; KONAMI_BUFFER_LEN] = [
    Key::ArrowUp,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::B,
    Key::A,
];

/// Hue rotation applied to the whole page while the easter egg is active
pub const KONAMI_HUE_ROTATION_DEG: f32 = 180.0;
