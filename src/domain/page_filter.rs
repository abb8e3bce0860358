//! Whole-page hue rotation used by the Konami easter egg.
//!
//! egui has no post-processing pass, so instead of filtering pixels the page
//! runs every themed colour through [`PageFilter::apply`] before painting.

use std::time::Duration;

use eframe::egui::Color32;

use crate::utils::app_time::{AppInstant, progress};

/// Animated hue rotation. The angle eases from `from_deg` to `to_deg` over `transition`.
#[derive(Debug, Clone, Copy)]
pub struct PageFilter {
    from_deg: f32,
    to_deg: f32,
    changed_at: Option<AppInstant>,
    transition: Duration,
}

impl PageFilter {
    pub fn new(transition: Duration) -> Self {
        Self {
            from_deg: 0.0,
            to_deg: 0.0,
            changed_at: None,
            transition,
        }
    }

    /// Starts a transition to `deg`, continuing from wherever the current one is.
    pub fn set_hue_rotation(&mut self, deg: f32, now: AppInstant) {
        self.from_deg = self.angle_at(now);
        self.to_deg = deg;
        self.changed_at = Some(now);
    }

    pub fn clear(&mut self, now: AppInstant) {
        self.set_hue_rotation(0.0, now);
    }

    pub fn target(&self) -> f32 {
        self.to_deg
    }

    pub fn angle_at(&self, now: AppInstant) -> f32 {
        let Some(changed_at) = self.changed_at else {
            return self.to_deg;
        };
        let t = ease(progress(changed_at, now, self.transition));
        self.from_deg + (self.to_deg - self.from_deg) * t
    }

    /// True while the angle is still moving.
    pub fn is_animating(&self, now: AppInstant) -> bool {
        self.changed_at
            .is_some_and(|at| progress(at, now, self.transition) < 1.0)
    }

    pub fn apply(&self, color: Color32, now: AppInstant) -> Color32 {
        hue_rotate(color, self.angle_at(now))
    }
}

// CSS `ease` is close enough to a smoothstep for a half-second transition
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Applies the CSS `hue-rotate()` filter matrix to an sRGB colour. Alpha is kept.
pub fn hue_rotate(color: Color32, deg: f32) -> Color32 {
    if deg.rem_euclid(360.0) == 0.0 {
        return color;
    }

    let (sin, cos) = deg.to_radians().sin_cos();
    let m = [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ];

    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let rgb = [r as f32, g as f32, b as f32];
    let channel = |row: [f32; 3]| -> u8 {
        (row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2])
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Color32::from_rgba_unmultiplied(channel(m[0]), channel(m[1]), channel(m[2]), a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    fn close(a: Color32, b: Color32, tolerance: i16) -> bool {
        a.to_array()
            .iter()
            .zip(b.to_array().iter())
            .all(|(x, y)| (*x as i16 - *y as i16).abs() <= tolerance)
    }

    #[test]
    fn zero_and_full_turn_are_identity() {
        let orange = Color32::from_rgb(0xff, 0x6b, 0x35);
        assert_eq!(hue_rotate(orange, 0.0), orange);
        assert_eq!(hue_rotate(orange, 360.0), orange);
    }

    #[test]
    fn greys_are_unchanged() {
        for v in [0u8, 26, 128, 255] {
            let grey = Color32::from_gray(v);
            assert!(close(hue_rotate(grey, 180.0), grey, 1));
        }
    }

    #[test]
    fn half_turn_moves_orange_towards_blue() {
        let rotated = hue_rotate(Color32::from_rgb(0xff, 0x6b, 0x35), 180.0);
        assert!(rotated.b() > rotated.r());
    }

    #[test]
    fn transition_reaches_target_and_settles() {
        let start = now();
        let mut filter = PageFilter::new(Duration::from_millis(500));
        assert_eq!(filter.angle_at(start), 0.0);

        filter.set_hue_rotation(180.0, start);
        assert_eq!(filter.angle_at(start), 0.0);
        let mid = filter.angle_at(start + Duration::from_millis(250));
        assert!(mid > 0.0 && mid < 180.0);
        assert!(filter.is_animating(start + Duration::from_millis(250)));
        assert_eq!(filter.angle_at(start + Duration::from_millis(500)), 180.0);
        assert!(!filter.is_animating(start + Duration::from_secs(1)));
    }

    #[test]
    fn clear_reverses_from_current_angle() {
        let start = now();
        let mut filter = PageFilter::new(Duration::from_millis(500));
        filter.set_hue_rotation(180.0, start);
        let later = start + Duration::from_secs(5);
        filter.clear(later);
        assert_eq!(filter.angle_at(later), 180.0);
        assert_eq!(filter.angle_at(later + Duration::from_millis(500)), 0.0);
        assert_eq!(filter.target(), 0.0);
    }
}
