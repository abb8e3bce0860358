use eframe::egui::{Align2, Color32, CornerRadius, FontFamily, FontId, Grid, RichText, Sense, Shape, Stroke, Ui, vec2};

use crate::config::CHART_CONFIG;
use crate::domain::PageFilter;
use crate::domain::chart::{arc_points, convex_wedges, slice_arcs};
use crate::utils::app_time::AppInstant;

/// Paints the tokenomics pie.
#[derive(Default)]
pub struct ChartView {
    /// The missing-surface warning is logged once, not every frame
    warned: bool,
}

impl ChartView {
    pub fn new() -> Self {
        Self { warned: false }
    }

    /// Draws the pie. Returns false when there was no usable surface to draw on.
    pub fn show(&mut self, ui: &mut Ui, filter: &PageFilter, now: AppInstant) -> bool {
        let cfg = &CHART_CONFIG;

        let pixels_per_point = ui.ctx().pixels_per_point();
        let scale = chart_scale(ui.available_width());
        if !pixels_per_point.is_finite() || pixels_per_point <= 0.0 || scale <= 0.0 {
            if !self.warned {
                log::warn!("Chart surface not available");
                self.warned = true;
            }
            return false;
        }
        self.warned = false;
        let size = vec2(cfg.width, cfg.height) * scale;
        let radius = cfg.radius * scale;
        let label_offset = cfg.label_offset * scale;

        // Sized in points; egui maps it onto physical pixels for the device ratio
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return true;
        }

        let painter = ui.painter_at(rect);
        let center = rect.center();
        let stroke = Stroke::new(cfg.stroke_width, filter.apply(cfg.stroke_color, now));

        for (slice, arc) in cfg.slices.iter().zip(slice_arcs(cfg.slices)) {
            let fill = filter.apply(slice.color, now);
            for wedge in convex_wedges(center, radius, arc) {
                painter.add(Shape::convex_polygon(wedge, fill, Stroke::NONE));
            }

            let mut outline = vec![center];
            outline.extend(arc_points(center, radius, arc));
            painter.add(Shape::closed_line(outline, stroke));
        }

        let font = FontId::new(cfg.label_size * scale, FontFamily::Proportional);
        let label_color = filter.apply(cfg.label_color, now);
        let [top, bottom] = cfg.label_lines;
        painter.text(
            center - vec2(0.0, label_offset),
            Align2::CENTER_CENTER,
            top,
            font.clone(),
            label_color,
        );
        painter.text(
            center + vec2(0.0, label_offset),
            Align2::CENTER_CENTER,
            bottom,
            font,
            label_color,
        );

        true
    }

    pub fn legend(&self, ui: &mut Ui, filter: &PageFilter, now: AppInstant, text: Color32) {
        Grid::new("tokenomics_legend")
            .num_columns(3)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for slice in CHART_CONFIG.slices {
                    let (swatch, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
                    ui.painter()
                        .rect_filled(swatch, CornerRadius::same(3), filter.apply(slice.color, now));
                    ui.label(RichText::new(slice.label).color(text));
                    ui.label(RichText::new(format!("{}%", slice.value)).strong().color(text));
                    ui.end_row();
                }
            });
    }
}

/// Fixed size on wide columns, shrunk to fit narrower ones.
fn chart_scale(available_width: f32) -> f32 {
    if !available_width.is_finite() || available_width <= 0.0 {
        return 0.0;
    }
    (available_width / CHART_CONFIG.width).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_keeps_full_size_when_it_fits_and_shrinks_otherwise() {
        assert_eq!(chart_scale(900.0), 1.0);
        assert_eq!(chart_scale(CHART_CONFIG.width), 1.0);
        assert!((chart_scale(CHART_CONFIG.width / 2.0) - 0.5).abs() < 1e-6);
        assert_eq!(chart_scale(0.0), 0.0);
        assert_eq!(chart_scale(f32::NAN), 0.0);
    }
}
