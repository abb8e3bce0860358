//! Pie geometry for the tokenomics chart.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Pos2, pos2};

use crate::config::ChartSlice;

/// Start and end angle (radians, y axis pointing down) of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub start: f32,
    pub end: f32,
}

impl SliceArc {
    pub fn sweep(&self) -> f32 {
        self.end - self.start
    }
}

/// Slices start at twelve o'clock and advance clockwise by their share of 100.
pub fn slice_arcs(slices: &[ChartSlice]) -> Vec<SliceArc> {
    let mut current = -FRAC_PI_2;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.value as f32 / 100.0 * TAU;
            let arc = SliceArc {
                start: current,
                end: current + sweep,
            };
            current += sweep;
            arc
        })
        .collect()
}

/// Points along the arc, first and last included. Roughly one point every 2.8 degrees.
pub fn arc_points(center: Pos2, radius: f32, arc: SliceArc) -> Vec<Pos2> {
    let steps = ((arc.sweep().abs() / TAU) * 128.0).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let angle = arc.start + arc.sweep() * i as f32 / steps as f32;
            pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Splits a wedge into convex pieces (each at most a quarter turn) for filling.
pub fn convex_wedges(center: Pos2, radius: f32, arc: SliceArc) -> Vec<Vec<Pos2>> {
    let max_sweep = TAU / 4.0;
    let pieces = (arc.sweep() / max_sweep).ceil().max(1.0) as usize;
    let piece_sweep = arc.sweep() / pieces as f32;

    (0..pieces)
        .map(|i| {
            let piece = SliceArc {
                start: arc.start + piece_sweep * i as f32,
                end: arc.start + piece_sweep * (i + 1) as f32,
            };
            let mut points = vec![center];
            points.extend(arc_points(center, radius, piece));
            points
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHART_CONFIG;

    #[test]
    fn slices_cover_exactly_one_turn_from_twelve_o_clock() {
        let arcs = slice_arcs(CHART_CONFIG.slices);
        assert_eq!(arcs.len(), 4);
        assert_eq!(arcs[0].start, -FRAC_PI_2);
        for pair in arcs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let last = arcs.last().map(|a| a.end).unwrap_or_default();
        assert!((last - (TAU - FRAC_PI_2)).abs() < 1e-4);
    }

    #[test]
    fn liquidity_slice_is_sixty_nine_percent() {
        let arcs = slice_arcs(CHART_CONFIG.slices);
        assert!((arcs[0].sweep() / TAU - 0.69).abs() < 1e-5);
    }

    #[test]
    fn large_slice_is_split_into_convex_pieces() {
        let arcs = slice_arcs(CHART_CONFIG.slices);
        let pieces = convex_wedges(Pos2::ZERO, 120.0, arcs[0]);
        assert_eq!(pieces.len(), 3);
        assert!(pieces.iter().all(|p| p[0] == Pos2::ZERO && p.len() >= 3));
    }

    #[test]
    fn arc_points_lie_on_the_circle() {
        let arc = SliceArc { start: 0.0, end: 1.0 };
        for p in arc_points(pos2(150.0, 150.0), 120.0, arc) {
            let r = ((p.x - 150.0).powi(2) + (p.y - 150.0).powi(2)).sqrt();
            assert!((r - 120.0).abs() < 1e-3);
        }
    }
}
