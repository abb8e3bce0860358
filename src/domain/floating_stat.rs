//! Self-animating, self-removing fake metric widgets.

use crate::config::{FLOATING_STAT_CONFIG, TIMING};
use crate::content::FakeStat;
use crate::domain::tooltip::OverlayId;
use crate::utils::app_time::{AppInstant, progress};

#[derive(Debug, Clone)]
pub struct FloatingStat {
    pub id: OverlayId,
    pub stat: FakeStat,
    pub value: u32,
    /// Vertical position as a fraction of viewport height
    pub top_frac: f64,
    pub spawned_at: AppInstant,
}

impl FloatingStat {
    pub fn label(&self) -> &'static str {
        self.stat.label()
    }

    /// Offset from the right viewport edge (px) and opacity at `now`.
    pub fn appearance(&self, now: AppInstant) -> (f32, f32) {
        slide_and_fade(progress(self.spawned_at, now, TIMING.stat_lifetime))
    }
}

/// Keyframes of the slide-in, hold, slide-out animation.
///
/// `t` is the animation progress in [0, 1]. Returns `(right, opacity)` where
/// `right` is the distance between the widget and the right viewport edge.
pub fn slide_and_fade(t: f32) -> (f32, f32) {
    let cfg = &FLOATING_STAT_CONFIG;
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return (cfg.hidden_right, 0.0);
    }
    let edge = cfg.slide_fraction;

    // Fraction of the way "in" (0 = hidden, 1 = resting)
    let shown = if t < edge {
        ease_out(t / edge)
    } else if t <= 1.0 - edge {
        1.0
    } else {
        1.0 - ease_out((t - (1.0 - edge)) / edge)
    };

    let right = cfg.hidden_right + (cfg.visible_right - cfg.hidden_right) * shown;
    (right, shown)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_and_ends_hidden() {
        assert_eq!(slide_and_fade(0.0), (FLOATING_STAT_CONFIG.hidden_right, 0.0));
        assert_eq!(slide_and_fade(1.0), (FLOATING_STAT_CONFIG.hidden_right, 0.0));
    }

    #[test]
    fn rests_on_screen_between_keyframes() {
        for t in [0.15, 0.3, 0.5, 0.7, 0.8] {
            assert_eq!(slide_and_fade(t), (FLOATING_STAT_CONFIG.visible_right, 1.0), "t = {}", t);
        }
    }

    #[test]
    fn slide_in_is_monotonic() {
        let mut last = slide_and_fade(0.0);
        for step in 1..=15 {
            let current = slide_and_fade(step as f32 / 100.0);
            assert!(current.0 >= last.0 && current.1 >= last.1);
            last = current;
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(slide_and_fade(-1.0), slide_and_fade(0.0));
        assert_eq!(slide_and_fade(3.0), slide_and_fade(1.0));
    }
}
