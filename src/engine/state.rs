use crate::config::TIMING;
use crate::domain::{FloatingStat, KonamiDetector, Modal, OverlayId, PageFilter, Tooltip};

use super::scheduler::TaskId;

pub const MOON_PHASE: &str = "Definitely Going to Moon Soon™";

/// All mutable UI state of the page. Owned by the controller.
#[derive(Debug)]
pub struct AppState {
    pub user_has_been_warned: bool,
    pub click_count: u32,
    pub current_moon_phase: &'static str,

    /// At most one of each
    pub active_tooltip: Option<Tooltip>,
    pub active_modal: Option<Modal>,
    pub floating_stats: Vec<FloatingStat>,

    pub stats_timer: Option<TaskId>,
    pub message_timer: Option<TaskId>,

    pub konami: KonamiDetector,
    pub is_initialized: bool,

    pub page_visible: bool,
    /// Page scroll is disabled while a modal is open
    pub scroll_locked: bool,
    pub page_filter: PageFilter,
    pub buy_button_pressed: bool,

    // Pending one-shot timers, kept so a replaced overlay can cancel them
    pub(super) tooltip_timers: Vec<TaskId>,
    pub(super) konami_timer: Option<TaskId>,
    pub(super) feedback_timer: Option<TaskId>,
    next_overlay_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user_has_been_warned: false,
            click_count: 0,
            current_moon_phase: MOON_PHASE,
            active_tooltip: None,
            active_modal: None,
            floating_stats: Vec::new(),
            stats_timer: None,
            message_timer: None,
            konami: KonamiDetector::default(),
            is_initialized: false,
            page_visible: true,
            scroll_locked: false,
            page_filter: PageFilter::new(TIMING.filter_transition),
            buy_button_pressed: false,
            tooltip_timers: Vec::new(),
            konami_timer: None,
            feedback_timer: None,
            next_overlay_id: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn next_overlay_id(&mut self) -> OverlayId {
        self.next_overlay_id += 1;
        OverlayId(self.next_overlay_id)
    }
}
