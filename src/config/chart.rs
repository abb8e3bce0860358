//! Tokenomics chart configuration

use eframe::egui::Color32;

/// One slice of the (entirely made up) token distribution.
#[derive(Debug, Clone, Copy)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: u32,
    pub color: Color32,
}

pub struct ChartConfig {
    /// Logical size of the drawing surface. egui scales it by pixels_per_point.
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub slices: &'static [ChartSlice],
    pub stroke_color: Color32,
    pub stroke_width: f32,
    pub label_color: Color32,
    pub label_size: f32,
    /// The two lines of the centre label and their vertical offset from the centre
    pub label_lines: [&'static str; 2],
    pub label_offset: f32,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    width: 300.0,
    height: 300.0,
    radius: 120.0,
    slices: &[
        ChartSlice {
            label: "Liquidity",
            value: 69,
            color: Color32::from_rgb(0xff, 0x6b, 0x35),
        },
        ChartSlice {
            label: "Marketing",
            value: 20,
            color: Color32::from_rgb(0xff, 0xd2, 0x3f),
        },
        ChartSlice {
            label: "Team",
            value: 10,
            color: Color32::from_rgb(0x00, 0x4e, 0x89),
        },
        ChartSlice {
            label: "Charity",
            value: 1,
            color: Color32::from_rgb(0x28, 0xa7, 0x45),
        },
    ],
    stroke_color: Color32::WHITE,
    stroke_width: 3.0,
    label_color: Color32::from_rgb(0x1a, 0x1a, 0x1a),
    label_size: 16.0,
    label_lines: ["VERY", "OFFICIAL"],
    label_offset: 10.0,
};
