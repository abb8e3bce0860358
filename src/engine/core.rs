use anyhow::Context;
use eframe::egui::{Key, Rect, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{CHANCES, FLOATING_STAT_CONFIG, KONAMI_HUE_ROTATION_DEG, PageOptions, TIMING};
use crate::content::{self, FakeStat, ModalContent, WHITEPAPER_TITLE, responses};
use crate::domain::{CloseReason, FloatingStat, Modal, OverlayId, Tooltip};
use crate::utils::app_time::AppInstant;
use crate::utils::random::{chance, pick};

use super::messages::PageEvent;
use super::scheduler::{Scheduler, TaskKind};
use super::state::AppState;

#[cfg(debug_assertions)]
use crate::config::debug::{PRINT_UI_INTERACTIONS, PRINT_VISIBILITY_CHANGES};

/// Owns the page state, its timers and the random source.
///
/// Created once with the app, initialized once, disposed on exit. Every
/// mutation happens synchronously inside `handle_event` or `update`.
pub struct PageController {
    state: AppState,
    scheduler: Scheduler,
    rng: SmallRng,
    options: PageOptions,
    /// Time of the last `update`, used to spot frames that never ran
    last_frame: Option<AppInstant>,
}

impl PageController {
    pub fn new(options: PageOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            state: AppState::new(),
            scheduler: Scheduler::new(),
            rng,
            options,
            last_frame: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs [`Self::init`], logging instead of propagating a failure. The page
    /// stays up without its interactions in that case.
    pub fn initialize(&mut self, now: AppInstant) -> bool {
        match self.init(now) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to initialize Example Coin: {:#}", e);
                false
            }
        }
    }

    /// Validates the content, logs the startup banner and starts the ambient
    /// timers. Calling it again after a success does nothing.
    pub fn init(&mut self, now: AppInstant) -> anyhow::Result<()> {
        if self.state.is_initialized {
            return Ok(());
        }

        content::validate().context("built-in content failed validation")?;

        log_startup_messages();
        self.start_ambient_timers(now);
        self.last_frame = Some(now);
        self.state.is_initialized = true;
        Ok(())
    }

    pub fn handle_event(&mut self, event: PageEvent, now: AppInstant) {
        // Nothing is wired up until init succeeded
        if !self.state.is_initialized {
            return;
        }

        match event {
            PageEvent::BuyClicked { anchor } => self.on_buy_clicked(anchor, now),
            PageEvent::WhitepaperClicked => {
                self.show_modal(WHITEPAPER_TITLE, content::generate_mock_whitepaper(), now);
            }
            PageEvent::TeamMemberClicked { index, anchor } => {
                self.show_tooltip(anchor, content::team_secret(index), now);
            }
            PageEvent::SocialLinkClicked { label, anchor } => {
                self.show_tooltip(anchor, content::social_message(&label), now);
            }
            PageEvent::RoadmapItemClicked { anchor } => {
                if let Some(status) = pick(&mut self.rng, responses::ROADMAP_STATUSES) {
                    self.show_tooltip(anchor, *status, now);
                }
            }
            PageEvent::KeyPressed { key, page } => self.on_key_pressed(key, page, now),
            PageEvent::VisibilityChanged { visible } => self.set_page_visible(visible, now),
            PageEvent::ModalClosed(reason) => self.close_modal(reason),
        }
    }

    /// Runs every due timer. Returns true while something is animating and the
    /// page should be repainted continuously.
    pub fn update(&mut self, now: AppInstant) -> bool {
        self.catch_up_missed_frames(now);

        for (id, kind) in self.scheduler.due(now) {
            self.state.tooltip_timers.retain(|t| *t != id);
            self.run_task(kind, now);
        }

        self.state.active_tooltip.is_some()
            || !self.state.floating_stats.is_empty()
            || self.state.page_filter.is_animating(now)
            || self
                .state
                .active_modal
                .as_ref()
                .is_some_and(|m| m.is_opening(now))
    }

    /// When the next timer fires, for scheduling a repaint
    pub fn next_deadline(&self) -> Option<AppInstant> {
        self.scheduler.next_deadline()
    }

    /// Replaces any tooltip with a new one anchored on `anchor`.
    pub fn show_tooltip(
        &mut self,
        anchor: Rect,
        message: impl Into<String>,
        now: AppInstant,
    ) -> OverlayId {
        self.remove_tooltip();

        let id = self.state.next_overlay_id();
        self.state.active_tooltip = Some(Tooltip::new(id, anchor, message, now));

        let fade_at = TIMING.tooltip_duration;
        let remove_at = TIMING.tooltip_duration + TIMING.tooltip_fade;
        self.state.tooltip_timers = vec![
            self.scheduler.after(TaskKind::TooltipFadeOut(id), fade_at, now),
            self.scheduler.after(TaskKind::TooltipRemove(id), remove_at, now),
        ];
        id
    }

    /// Stores the size measured by the first frame. The fade-in starts from
    /// that frame rather than from creation.
    pub fn record_tooltip_size(&mut self, id: OverlayId, size: Vec2, now: AppInstant) {
        if let Some(tooltip) = self.state.active_tooltip.as_mut() {
            if tooltip.id == id && tooltip.measured.is_none() {
                tooltip.measured = Some(size);
                tooltip.shown_at = now;
            }
        }
    }

    /// Replaces any modal with a new one and locks page scroll.
    pub fn show_modal(
        &mut self,
        title: impl Into<String>,
        content: ModalContent,
        now: AppInstant,
    ) -> OverlayId {
        self.close_modal(CloseReason::Replaced);

        let id = self.state.next_overlay_id();
        let modal = Modal::new(id, title, content, now);

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("Opening modal '{}'", modal.title);
        }

        self.state.active_modal = Some(modal);
        self.state.scroll_locked = true;
        id
    }

    pub fn close_modal(&mut self, _reason: CloseReason) {
        if let Some(_modal) = self.state.active_modal.take() {
            #[cfg(debug_assertions)]
            if PRINT_UI_INTERACTIONS {
                log::info!("Closed modal '{}' ({:?})", _modal.title, _reason);
            }
        }
        self.state.scroll_locked = false;
    }

    /// True exactly once per modal: the frame that should focus its close button
    pub fn take_modal_focus(&mut self) -> bool {
        match self.state.active_modal.as_mut() {
            Some(modal) if modal.focus_pending => {
                modal.focus_pending = false;
                true
            }
            _ => false,
        }
    }

    /// Pauses both ambient timers while hidden and restarts them on return.
    pub fn set_page_visible(&mut self, visible: bool, now: AppInstant) {
        if self.state.page_visible == visible {
            return;
        }
        self.state.page_visible = visible;

        #[cfg(debug_assertions)]
        if PRINT_VISIBILITY_CHANGES {
            log::debug!("Page visibility: {}", if visible { "visible" } else { "hidden" });
        }

        let timers = [self.state.stats_timer, self.state.message_timer];
        for id in timers.into_iter().flatten() {
            if visible {
                self.scheduler.resume(id, now);
            } else {
                self.scheduler.pause(id);
            }
        }
    }

    /// Page unload: stop every timer and tear down all overlays.
    pub fn dispose(&mut self) {
        self.scheduler.clear();
        self.state.stats_timer = None;
        self.state.message_timer = None;
        self.state.tooltip_timers.clear();
        self.state.konami_timer = None;
        self.state.feedback_timer = None;
        self.state.active_tooltip = None;
        self.close_modal(CloseReason::Replaced);
        self.state.floating_stats.clear();
        self.state.buy_button_pressed = false;
    }

    // --- HANDLERS ---

    fn on_buy_clicked(&mut self, anchor: Rect, now: AppInstant) {
        self.state.click_count += 1;

        if let Some(response) = pick(&mut self.rng, responses::BUY_RESPONSES) {
            self.show_tooltip(anchor, *response, now);
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("Buy clicked ({} so far)", self.state.click_count);
        }

        if let Some(id) = self.state.feedback_timer.take() {
            self.scheduler.cancel(id);
        }
        self.state.buy_button_pressed = true;
        self.state.feedback_timer = Some(self.scheduler.after(
            TaskKind::ButtonFeedbackEnd,
            TIMING.button_feedback,
            now,
        ));
    }

    fn on_key_pressed(&mut self, key: Key, page: Rect, now: AppInstant) {
        if key == Key::Escape && self.state.active_modal.is_some() {
            self.close_modal(CloseReason::Escape);
        }

        if self.state.konami.push(key) {
            self.activate_easter_egg(page, now);
        }
    }

    fn activate_easter_egg(&mut self, page: Rect, now: AppInstant) {
        log::info!("Konami code entered");
        self.state
            .page_filter
            .set_hue_rotation(KONAMI_HUE_ROTATION_DEG, now);
        self.show_tooltip(page, responses::KONAMI_MESSAGE, now);

        if let Some(id) = self.state.konami_timer.take() {
            self.scheduler.cancel(id);
        }
        self.state.konami_timer =
            Some(self.scheduler.after(TaskKind::KonamiRevert, TIMING.konami_revert, now));
    }

    fn run_task(&mut self, kind: TaskKind, now: AppInstant) {
        match kind {
            TaskKind::StatTick => self.on_stat_tick(now),
            TaskKind::MessageTick => self.on_message_tick(),
            TaskKind::TooltipFadeOut(id) => {
                if let Some(tooltip) = self.state.active_tooltip.as_mut() {
                    if tooltip.id == id {
                        tooltip.begin_hide(now);
                    }
                }
            }
            TaskKind::TooltipRemove(id) => {
                if self.state.active_tooltip.as_ref().is_some_and(|t| t.id == id) {
                    self.state.active_tooltip = None;
                }
            }
            TaskKind::StatRemove(id) => {
                self.state.floating_stats.retain(|s| s.id != id);
            }
            TaskKind::KonamiRevert => {
                self.state.konami_timer = None;
                self.state.page_filter.clear(now);
            }
            TaskKind::ButtonFeedbackEnd => {
                self.state.feedback_timer = None;
                self.state.buy_button_pressed = false;
            }
        }
    }

    /// No frame ran for longer than a stat interval: the window was hidden or
    /// minimized without telling us. Replays that as a hide at the last frame
    /// and a show now, so the ambient timers restart with a full interval.
    fn catch_up_missed_frames(&mut self, now: AppInstant) {
        let Some(last) = self.last_frame.replace(now) else {
            return;
        };
        if !self.state.page_visible || now.saturating_duration_since(last) <= TIMING.stat_interval {
            return;
        }

        log::debug!(
            "No frames for {} ms, treating the gap as hidden",
            now.saturating_duration_since(last).as_millis()
        );
        self.set_page_visible(false, last);
        self.set_page_visible(true, now);
    }

    /// Drops the tooltip together with its pending fade and removal timers.
    fn remove_tooltip(&mut self) {
        for id in self.state.tooltip_timers.drain(..) {
            self.scheduler.cancel(id);
        }
        self.state.active_tooltip = None;
    }

    fn on_stat_tick(&mut self, now: AppInstant) {
        if !self.state.page_visible || !chance(&mut self.rng, CHANCES.stat_spawn) {
            return;
        }
        if self.options.reduced_motion {
            log::debug!("Reduced motion: skipping floating stat");
            return;
        }
        self.spawn_floating_stat(now);
    }

    fn on_message_tick(&mut self) {
        if !self.state.page_visible || !chance(&mut self.rng, CHANCES.console_message) {
            return;
        }
        if let Some(message) = pick(&mut self.rng, responses::CONSOLE_MESSAGES) {
            log::info!("{}", message);
        }
    }

    fn spawn_floating_stat(&mut self, now: AppInstant) -> Option<OverlayId> {
        let stat = *pick(&mut self.rng, &FakeStat::ALL)?;
        let value = stat.sample(&mut self.rng);
        let top_frac = self
            .rng
            .random_range(FLOATING_STAT_CONFIG.top_min_frac..FLOATING_STAT_CONFIG.top_max_frac);

        let id = self.state.next_overlay_id();
        self.state.floating_stats.push(FloatingStat {
            id,
            stat,
            value,
            top_frac,
            spawned_at: now,
        });
        self.scheduler
            .after(TaskKind::StatRemove(id), TIMING.stat_lifetime, now);
        Some(id)
    }

    fn start_ambient_timers(&mut self, now: AppInstant) {
        self.state.stats_timer =
            Some(self.scheduler.every(TaskKind::StatTick, TIMING.stat_interval, now));
        self.state.message_timer = Some(self.scheduler.every(
            TaskKind::MessageTick,
            TIMING.message_interval,
            now,
        ));
    }
}

fn log_startup_messages() {
    for line in responses::STARTUP_MESSAGES {
        log::info!("{}", line);
    }
    log::info!("{}", responses::DEBUG_BANNER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KONAMI_SEQUENCE;
    use crate::content::SocialPlatform;
    use crate::content::responses::{BUY_RESPONSES, ROADMAP_STATUSES, SOCIAL_FALLBACK};
    use crate::utils::app_time::now;
    use eframe::egui::{pos2, vec2};
    use std::time::Duration;

    fn controller() -> PageController {
        PageController::new(PageOptions {
            reduced_motion: false,
            seed: Some(1234),
        })
    }

    fn ready(t0: AppInstant) -> PageController {
        let mut c = controller();
        assert!(c.initialize(t0));
        c
    }

    fn anchor() -> Rect {
        Rect::from_min_size(pos2(100.0, 200.0), vec2(120.0, 40.0))
    }

    fn page() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(1024.0, 768.0))
    }

    fn tooltip_message(c: &PageController) -> Option<&str> {
        c.state().active_tooltip.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn init_is_idempotent() {
        let t0 = now();
        let mut c = ready(t0);
        let deadline = c.next_deadline();
        let stats_timer = c.state().stats_timer;

        assert!(c.initialize(t0 + Duration::from_secs(1)));
        assert!(c.init(t0 + Duration::from_secs(2)).is_ok());
        assert_eq!(c.next_deadline(), deadline);
        assert_eq!(c.state().stats_timer, stats_timer);
    }

    #[test]
    fn events_before_init_are_ignored() {
        let t0 = now();
        let mut c = controller();
        c.handle_event(PageEvent::BuyClicked { anchor: anchor() }, t0);
        assert_eq!(c.state().click_count, 0);
        assert!(c.state().active_tooltip.is_none());
    }

    #[test]
    fn buy_click_counts_and_shows_a_known_response() {
        let t0 = now();
        let mut c = ready(t0);
        for n in 1..=20 {
            c.handle_event(PageEvent::BuyClicked { anchor: anchor() }, t0);
            assert_eq!(c.state().click_count, n);
            let message = tooltip_message(&c).unwrap_or_default();
            assert!(BUY_RESPONSES.contains(&message), "unexpected: {}", message);
        }
        assert!(c.state().buy_button_pressed);
        c.update(t0 + TIMING.button_feedback);
        assert!(!c.state().buy_button_pressed);
    }

    #[test]
    fn only_one_tooltip_and_old_timers_do_not_remove_the_new_one() {
        let t0 = now();
        let mut c = ready(t0);
        let first = c.show_tooltip(anchor(), "first", t0);
        let later = t0 + Duration::from_millis(2_000);
        let second = c.show_tooltip(anchor(), "second", later);
        assert_ne!(first, second);

        // The first tooltip's removal deadline passes
        c.update(t0 + TIMING.tooltip_duration + TIMING.tooltip_fade);
        assert_eq!(tooltip_message(&c), Some("second"));

        c.update(later + TIMING.tooltip_duration + TIMING.tooltip_fade);
        assert!(c.state().active_tooltip.is_none());
    }

    #[test]
    fn tooltip_fades_before_it_is_removed() {
        let t0 = now();
        let mut c = ready(t0);
        c.show_tooltip(anchor(), "hello", t0);
        c.update(t0 + TIMING.tooltip_duration);
        let phase = c.state().active_tooltip.as_ref().map(|t| t.phase);
        assert!(matches!(phase, Some(crate::domain::TooltipPhase::Hiding(_))));
    }

    #[test]
    fn measuring_restarts_the_fade_in() {
        let t0 = now();
        let mut c = ready(t0);
        let id = c.show_tooltip(anchor(), "hello", t0);
        let measured_at = t0 + Duration::from_millis(16);
        c.record_tooltip_size(id, vec2(200.0, 40.0), measured_at);
        c.record_tooltip_size(id, vec2(1.0, 1.0), measured_at + Duration::from_millis(16));

        let tooltip = c.state().active_tooltip.as_ref();
        assert_eq!(tooltip.and_then(|t| t.measured), Some(vec2(200.0, 40.0)));
        assert_eq!(tooltip.map(|t| t.shown_at), Some(measured_at));
    }

    #[test]
    fn whitepaper_opens_a_single_modal_and_locks_scroll() {
        let t0 = now();
        let mut c = ready(t0);
        c.handle_event(PageEvent::WhitepaperClicked, t0);
        c.handle_event(PageEvent::WhitepaperClicked, t0);

        let modal = c.state().active_modal.as_ref();
        assert_eq!(modal.map(|m| m.title.as_str()), Some(WHITEPAPER_TITLE));
        assert_eq!(modal.map(|m| m.id), Some(OverlayId(2)));
        assert!(c.state().scroll_locked);
        assert!(c.take_modal_focus());
        assert!(!c.take_modal_focus());
    }

    #[test]
    fn escape_closes_the_modal_and_restores_scroll() {
        let t0 = now();
        let mut c = ready(t0);
        c.handle_event(PageEvent::WhitepaperClicked, t0);
        c.handle_event(PageEvent::KeyPressed { key: Key::Escape, page: page() }, t0);
        assert!(c.state().active_modal.is_none());
        assert!(!c.state().scroll_locked);
    }

    #[test]
    fn backdrop_and_close_button_close_the_modal() {
        let t0 = now();
        let mut c = ready(t0);
        for reason in [CloseReason::Backdrop, CloseReason::CloseButton] {
            c.handle_event(PageEvent::WhitepaperClicked, t0);
            c.handle_event(PageEvent::ModalClosed(reason), t0);
            assert!(c.state().active_modal.is_none());
            assert!(!c.state().scroll_locked);
        }
    }

    #[test]
    fn team_members_use_their_own_secret_or_the_fallback() {
        let t0 = now();
        let mut c = ready(t0);
        c.handle_event(PageEvent::TeamMemberClicked { index: 0, anchor: anchor() }, t0);
        assert_eq!(
            tooltip_message(&c),
            Some("Real name: Kyle from Ohio. Favorite food: Ramen noodles.")
        );
        c.handle_event(PageEvent::TeamMemberClicked { index: 9, anchor: anchor() }, t0);
        assert_eq!(tooltip_message(&c), Some("Error: Backstory not found"));
    }

    #[test]
    fn social_links_are_looked_up_by_label() {
        let t0 = now();
        let mut c = ready(t0);
        let label = SocialPlatform::Telegram.to_string();
        c.handle_event(PageEvent::SocialLinkClicked { label, anchor: anchor() }, t0);
        assert_eq!(tooltip_message(&c), Some(SocialPlatform::Telegram.message()));

        let label = "Friendster".to_string();
        c.handle_event(PageEvent::SocialLinkClicked { label, anchor: anchor() }, t0);
        assert_eq!(tooltip_message(&c), Some(SOCIAL_FALLBACK));
    }

    #[test]
    fn roadmap_items_show_a_status() {
        let t0 = now();
        let mut c = ready(t0);
        c.handle_event(PageEvent::RoadmapItemClicked { anchor: anchor() }, t0);
        let message = tooltip_message(&c).unwrap_or_default();
        assert!(ROADMAP_STATUSES.contains(&message));
    }

    #[test]
    fn konami_rotates_hue_then_reverts() {
        let t0 = now();
        let mut c = ready(t0);
        for key in KONAMI_SEQUENCE {
            c.handle_event(PageEvent::KeyPressed { key, page: page() }, t0);
        }
        assert_eq!(c.state().page_filter.target(), KONAMI_HUE_ROTATION_DEG);
        assert_eq!(tooltip_message(&c), Some(responses::KONAMI_MESSAGE));

        c.update(t0 + TIMING.konami_revert);
        assert_eq!(c.state().page_filter.target(), 0.0);
    }

    #[test]
    fn partial_konami_does_nothing() {
        let t0 = now();
        let mut c = ready(t0);
        for key in &KONAMI_SEQUENCE[..8] {
            c.handle_event(PageEvent::KeyPressed { key: *key, page: page() }, t0);
        }
        assert_eq!(c.state().page_filter.target(), 0.0);
        assert!(c.state().active_tooltip.is_none());
    }

    #[test]
    fn hidden_page_pauses_ambient_timers_and_visible_resumes_both() {
        let t0 = now();
        let mut c = ready(t0);
        let stats = c.state().stats_timer.unwrap_or_else(|| panic!("stats timer"));
        let messages = c.state().message_timer.unwrap_or_else(|| panic!("message timer"));

        c.handle_event(PageEvent::VisibilityChanged { visible: false }, t0);
        assert!(c.scheduler.is_paused(stats));
        assert!(c.scheduler.is_paused(messages));
        assert_eq!(c.next_deadline(), None);

        // Nothing spawns while hidden, however long it stays hidden
        c.update(t0 + Duration::from_secs(600));
        assert!(c.state().floating_stats.is_empty());

        let back = t0 + Duration::from_secs(601);
        c.handle_event(PageEvent::VisibilityChanged { visible: true }, back);
        assert!(c.scheduler.is_active(stats));
        assert!(c.scheduler.is_active(messages));
        assert_eq!(c.next_deadline(), Some(back + TIMING.stat_interval));
    }

    #[test]
    fn a_long_frame_gap_restarts_ambient_timers_with_a_full_interval() {
        let t0 = now();
        let mut c = ready(t0);
        let stats = c.state().stats_timer.unwrap_or_else(|| panic!("stats timer"));

        // No visibility event arrives, the next frame simply comes ten minutes later
        let back = t0 + Duration::from_secs(600);
        assert!(!c.update(back));
        assert!(c.state().page_visible);
        assert!(c.scheduler.is_active(stats));
        assert!(c.state().floating_stats.is_empty());
        assert_eq!(c.next_deadline(), Some(back + TIMING.stat_interval));
    }

    #[test]
    fn regular_frames_keep_the_ambient_schedule() {
        let t0 = now();
        let mut c = ready(t0);
        c.update(t0 + Duration::from_millis(16));
        c.update(t0 + Duration::from_secs(4));
        assert_eq!(c.next_deadline(), Some(t0 + TIMING.stat_interval));
    }

    #[test]
    fn opening_modal_animates_until_the_slide_in_ends() {
        let t0 = now();
        let mut c = ready(t0);
        c.handle_event(PageEvent::WhitepaperClicked, t0);
        assert!(c.update(t0 + Duration::from_millis(100)));
        assert!(!c.update(t0 + TIMING.modal_slide_in));
        assert!(c.state().active_modal.is_some());
    }

    #[test]
    fn stats_spawn_in_range_and_remove_themselves() {
        let t0 = now();
        let mut c = ready(t0);
        let mut t = t0;
        let mut spawned = 0;
        for _ in 0..200 {
            t += TIMING.stat_interval;
            c.update(t);
            for stat in &c.state().floating_stats {
                assert!(stat.stat.range().contains(&stat.value));
                assert!((0.15..0.85).contains(&stat.top_frac));
            }
            spawned = spawned.max(c.state().floating_stats.len());
        }
        assert!(spawned > 0, "30% per tick over 200 ticks should spawn something");

        // Whatever is still floating goes away on unload
        c.dispose();
        assert!(c.state().floating_stats.is_empty());
    }

    #[test]
    fn stat_lifetime_is_enforced() {
        let t0 = now();
        let mut c = ready(t0);
        let id = c.spawn_floating_stat(t0);
        assert!(id.is_some());
        assert_eq!(c.state().floating_stats.len(), 1);
        c.update(t0 + TIMING.stat_lifetime);
        assert!(c.state().floating_stats.iter().all(|s| Some(s.id) != id));
    }

    #[test]
    fn reduced_motion_never_spawns_stats() {
        let t0 = now();
        let mut c = PageController::new(PageOptions {
            reduced_motion: true,
            seed: Some(5),
        });
        assert!(c.initialize(t0));
        let mut t = t0;
        for _ in 0..100 {
            t += TIMING.stat_interval;
            c.update(t);
        }
        assert!(c.state().floating_stats.is_empty());
    }

    #[test]
    fn dispose_clears_everything() {
        let t0 = now();
        let mut c = ready(t0);
        c.handle_event(PageEvent::WhitepaperClicked, t0);
        c.handle_event(PageEvent::BuyClicked { anchor: anchor() }, t0);
        c.dispose();

        assert!(c.state().active_tooltip.is_none());
        assert!(c.state().active_modal.is_none());
        assert!(!c.state().scroll_locked);
        assert!(c.state().stats_timer.is_none());
        assert!(c.next_deadline().is_none());
        assert!(!c.update(t0 + Duration::from_secs(60)));
    }
}
