use crate::config::{MODAL_CONFIG, TIMING};
use crate::content::ModalContent;
use crate::domain::tooltip::OverlayId;
use crate::utils::app_time::{AppInstant, progress};

/// Why a modal went away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    Escape,
    /// Replaced by a newer modal or removed on dispose
    Replaced,
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub id: OverlayId,
    pub title: String,
    pub content: ModalContent,
    pub opened_at: AppInstant,
    /// Focus goes to the close button once, on the first frame the dialog is shown
    pub focus_pending: bool,
}

impl Modal {
    pub fn new(
        id: OverlayId,
        title: impl Into<String>,
        content: ModalContent,
        now: AppInstant,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content,
            opened_at: now,
            focus_pending: true,
        }
    }

    pub fn is_opening(&self, now: AppInstant) -> bool {
        progress(self.opened_at, now, TIMING.modal_slide_in) < 1.0
    }

    pub fn appearance(&self, now: AppInstant) -> SlideIn {
        slide_in(progress(self.opened_at, now, TIMING.modal_slide_in))
    }
}

/// Dialog transform during the opening animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideIn {
    pub opacity: f32,
    pub scale: f32,
    /// Vertical offset in px, negative is up
    pub offset_y: f32,
}

/// Keyframes of the opening animation: from transparent, 90% size and 20 px
/// up to fully shown at rest. `t` is eased out quadratically.
pub fn slide_in(t: f32) -> SlideIn {
    let t = t.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t) * (1.0 - t);
    let cfg = &MODAL_CONFIG;
    SlideIn {
        opacity: eased,
        scale: cfg.start_scale + (1.0 - cfg.start_scale) * eased,
        offset_y: cfg.slide_from_px * (1.0 - eased),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    #[test]
    fn slide_in_starts_small_and_raised_and_ends_at_rest() {
        let start = slide_in(0.0);
        assert_eq!(start.opacity, 0.0);
        assert!((start.scale - 0.9).abs() < 1e-6);
        assert!((start.offset_y + 20.0).abs() < 1e-6);

        let end = slide_in(1.0);
        assert_eq!(end.opacity, 1.0);
        assert!((end.scale - 1.0).abs() < 1e-6);
        assert!(end.offset_y.abs() < 1e-6);
    }

    #[test]
    fn slide_in_moves_monotonically() {
        let frames: Vec<SlideIn> = (0..=10).map(|i| slide_in(i as f32 / 10.0)).collect();
        for pair in frames.windows(2) {
            assert!(pair[1].opacity >= pair[0].opacity);
            assert!(pair[1].scale >= pair[0].scale);
            assert!(pair[1].offset_y >= pair[0].offset_y);
        }
    }

    #[test]
    fn modal_stops_opening_after_the_slide_in() {
        let t0 = now();
        let modal = Modal::new(OverlayId(1), "title", ModalContent(Vec::new()), t0);
        assert!(modal.is_opening(t0));
        assert!(modal.is_opening(t0 + TIMING.modal_slide_in / 2));
        assert!(!modal.is_opening(t0 + TIMING.modal_slide_in));
        assert_eq!(modal.appearance(t0 + TIMING.modal_slide_in).opacity, 1.0);
    }
}
