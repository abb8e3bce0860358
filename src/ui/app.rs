use eframe::{Frame, egui};

use crate::config::PageOptions;
use crate::engine::{PageController, PageEvent};
use crate::ui::chart_view::ChartView;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{
    BrandGradient, VisibilityWatcher, pressed_keys, setup_custom_visuals, viewport_rect,
};
use crate::utils::app_time::{AppInstant, now};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SHUTDOWN;

/// The eframe app. Owns the controller and turns egui input into page events.
pub struct ExampleCoinApp {
    pub(super) controller: PageController,
    pub(super) chart_view: ChartView,
    pub(super) gradient: BrandGradient,
    visibility: VisibilityWatcher,
    created_at: AppInstant,
    load_time_logged: bool,
}

impl ExampleCoinApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: PageOptions) -> Self {
        let created_at = now();
        let mut controller = PageController::new(options);
        controller.initialize(created_at);

        Self {
            controller,
            chart_view: ChartView::new(),
            gradient: BrandGradient::new(),
            visibility: VisibilityWatcher::new(&cc.egui_ctx),
            created_at,
            load_time_logged: false,
        }
    }

    /// Visibility changes and key presses seen since the last frame, each
    /// with the time it happened.
    fn collect_input_events(
        &mut self,
        ctx: &egui::Context,
        at: AppInstant,
    ) -> Vec<(PageEvent, AppInstant)> {
        let mut events: Vec<(PageEvent, AppInstant)> = self
            .visibility
            .drain(ctx)
            .into_iter()
            .map(|(visible, when)| (PageEvent::VisibilityChanged { visible }, when))
            .collect();

        let page = viewport_rect(ctx);
        events.extend(
            pressed_keys(ctx)
                .into_iter()
                .map(|key| (PageEvent::KeyPressed { key, page }, at)),
        );

        events
    }

    fn log_load_time(&mut self, at: AppInstant) {
        if self.load_time_logged {
            return;
        }
        self.load_time_logged = true;
        let elapsed = at.saturating_duration_since(self.created_at);
        log::info!("ExampleCoin Load Time: {} ms", elapsed.as_millis());
    }

    fn schedule_repaint(&self, ctx: &egui::Context, animating: bool, at: AppInstant) {
        if animating {
            ctx.request_repaint();
        } else if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(at));
        }
    }
}

impl eframe::App for ExampleCoinApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.dispose();

        #[cfg(debug_assertions)]
        if PRINT_SHUTDOWN {
            log::info!("Example Coin shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let at = now();
        self.log_load_time(at);

        for (event, when) in self.collect_input_events(ctx, at) {
            self.controller.handle_event(event, when);
        }
        let mut animating = self.controller.update(at);

        let colors = UI_CONFIG
            .colors
            .filtered(&self.controller.state().page_filter, at);
        setup_custom_visuals(ctx, &colors);

        let mut events = self.render_page(ctx, &colors, at);
        self.render_floating_stats(ctx, at);
        events.extend(self.render_modal(ctx, &colors, at));
        self.render_tooltip(ctx, at);

        if !events.is_empty() {
            for event in events {
                self.controller.handle_event(event, at);
            }
            // Clicks create overlays that need their first measuring frame
            animating = true;
        }

        self.schedule_repaint(ctx, animating, at);
    }
}
