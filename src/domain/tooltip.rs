//! Tooltip lifecycle and placement.

use eframe::egui::{Pos2, Rect, Vec2, pos2};

use crate::config::TIMING;
use crate::utils::app_time::{AppInstant, progress};

/// Identifier shared by tooltips, modals and floating stats so a timer can
/// tell whether the overlay it was armed for is still the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPhase {
    /// Fading in, sliding from +slide to 0
    Showing,
    /// Fading out since the given instant, sliding from 0 to -slide
    Hiding(AppInstant),
}

#[derive(Debug, Clone)]
pub struct Tooltip {
    pub id: OverlayId,
    pub message: String,
    /// Screen rect of the element the tooltip belongs to
    pub anchor: Rect,
    pub shown_at: AppInstant,
    pub phase: TooltipPhase,
    /// Size reported by the first rendered frame. Until then the tooltip is
    /// laid out invisibly so it can be measured.
    pub measured: Option<Vec2>,
}

impl Tooltip {
    pub fn new(id: OverlayId, anchor: Rect, message: impl Into<String>, now: AppInstant) -> Self {
        Self {
            id,
            message: message.into(),
            anchor,
            shown_at: now,
            phase: TooltipPhase::Showing,
            measured: None,
        }
    }

    pub fn begin_hide(&mut self, now: AppInstant) {
        if self.phase == TooltipPhase::Showing {
            self.phase = TooltipPhase::Hiding(now);
        }
    }

    /// Opacity and vertical offset (px) at `now`.
    pub fn appearance(&self, now: AppInstant) -> (f32, f32) {
        let slide = TIMING.tooltip_slide_px;
        match (self.measured, self.phase) {
            (None, _) => (0.0, slide),
            (Some(_), TooltipPhase::Showing) => {
                let t = progress(self.shown_at, now, TIMING.tooltip_fade);
                (t, slide * (1.0 - t))
            }
            (Some(_), TooltipPhase::Hiding(since)) => {
                let t = progress(since, now, TIMING.tooltip_fade);
                (1.0 - t, -slide * t)
            }
        }
    }
}

/// Places a tooltip of `size` next to `anchor` inside `viewport`.
///
/// Centered above the anchor by default. If there is no room above, it goes
/// `gap` below the anchor. The result always keeps `margin` from every edge
/// (when the viewport is too small for that, the top-left margin wins).
pub fn position_tooltip(anchor: Rect, size: Vec2, viewport: Rect, margin: f32, gap: f32) -> Pos2 {
    let mut left = anchor.center().x - size.x / 2.0;
    let mut top = anchor.top() - size.y - gap;

    let min_left = viewport.left() + margin;
    let max_left = viewport.right() - size.x - margin;
    let min_top = viewport.top() + margin;
    let max_top = viewport.bottom() - size.y - margin;

    if left > max_left {
        left = max_left;
    }
    if left < min_left {
        left = min_left;
    }

    if top < min_top {
        top = anchor.bottom() + gap;
    }
    if top > max_top {
        top = max_top;
    }
    if top < min_top {
        top = min_top;
    }

    pos2(left, top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;
    use eframe::egui::vec2;
    use std::time::Duration;

    const MARGIN: f32 = 10.0;
    const GAP: f32 = 10.0;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))
    }

    fn inside_margin(pos: Pos2, size: Vec2, viewport: Rect) -> bool {
        pos.x >= viewport.left() + MARGIN
            && pos.y >= viewport.top() + MARGIN
            && pos.x + size.x <= viewport.right() - MARGIN
            && pos.y + size.y <= viewport.bottom() - MARGIN
    }

    #[test]
    fn centered_above_when_there_is_room() {
        let anchor = Rect::from_min_size(pos2(350.0, 300.0), vec2(100.0, 40.0));
        let size = vec2(200.0, 50.0);
        let pos = position_tooltip(anchor, size, viewport(), MARGIN, GAP);
        assert_eq!(pos, pos2(300.0, 240.0));
    }

    #[test]
    fn flips_below_when_too_close_to_top() {
        let anchor = Rect::from_min_size(pos2(350.0, 20.0), vec2(100.0, 40.0));
        let size = vec2(200.0, 50.0);
        let pos = position_tooltip(anchor, size, viewport(), MARGIN, GAP);
        assert_eq!(pos.y, 70.0);
    }

    #[test]
    fn clamped_against_left_and_right_edges() {
        let size = vec2(200.0, 50.0);
        let left_anchor = Rect::from_min_size(pos2(0.0, 300.0), vec2(20.0, 20.0));
        assert_eq!(position_tooltip(left_anchor, size, viewport(), MARGIN, GAP).x, MARGIN);

        let right_anchor = Rect::from_min_size(pos2(780.0, 300.0), vec2(20.0, 20.0));
        assert_eq!(
            position_tooltip(right_anchor, size, viewport(), MARGIN, GAP).x,
            800.0 - 200.0 - MARGIN
        );
    }

    #[test]
    fn whole_page_anchor_stays_on_screen() {
        // Anchoring on the entire page leaves no room above or below
        let size = vec2(280.0, 60.0);
        let pos = position_tooltip(viewport(), size, viewport(), MARGIN, GAP);
        assert!(inside_margin(pos, size, viewport()));
    }

    #[test]
    fn always_inside_margin_for_a_grid_of_anchors() {
        let size = vec2(180.0, 44.0);
        for x in (0..800).step_by(37) {
            for y in (0..600).step_by(29) {
                let anchor = Rect::from_min_size(pos2(x as f32, y as f32), vec2(60.0, 30.0));
                let pos = position_tooltip(anchor, size, viewport(), MARGIN, GAP);
                assert!(inside_margin(pos, size, viewport()), "anchor {:?} -> {:?}", anchor, pos);
            }
        }
    }

    #[test]
    fn unmeasured_tooltip_is_invisible() {
        let t0 = now();
        let tooltip = Tooltip::new(OverlayId(1), Rect::NOTHING, "hi", t0);
        assert_eq!(tooltip.appearance(t0 + Duration::from_secs(1)).0, 0.0);
    }

    #[test]
    fn fades_in_then_out() {
        let t0 = now();
        let mut tooltip = Tooltip::new(OverlayId(1), Rect::NOTHING, "hi", t0);
        tooltip.measured = Some(vec2(100.0, 30.0));

        let (opacity, offset) = tooltip.appearance(t0 + TIMING.tooltip_fade);
        assert_eq!((opacity, offset), (1.0, 0.0));

        let hide_at = t0 + TIMING.tooltip_duration;
        tooltip.begin_hide(hide_at);
        let (opacity, offset) = tooltip.appearance(hide_at + TIMING.tooltip_fade);
        assert_eq!(opacity, 0.0);
        assert_eq!(offset, -TIMING.tooltip_slide_px);
    }

    #[test]
    fn hide_only_starts_once() {
        let t0 = now();
        let mut tooltip = Tooltip::new(OverlayId(1), Rect::NOTHING, "hi", t0);
        tooltip.begin_hide(t0 + Duration::from_secs(3));
        tooltip.begin_hide(t0 + Duration::from_secs(9));
        assert_eq!(tooltip.phase, TooltipPhase::Hiding(t0 + Duration::from_secs(3)));
    }
}
