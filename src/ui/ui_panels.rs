use eframe::egui::{
    Button, CornerRadius, CursorIcon, Frame, Margin, Response, RichText, Sense, Stroke, Ui, vec2,
};
use strum::IntoEnumIterator;

use crate::content::SocialPlatform;
use crate::domain::PageFilter;
use crate::engine::PageEvent;
use crate::ui::chart_view::ChartView;
use crate::ui::config::{UI_CONFIG, UI_TEXT, UiColors};
use crate::ui::styles::UiStyleExt;
use crate::utils::app_time::AppInstant;

/// Trait for page sections that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// A white rounded card that reacts to clicks as a whole
fn clickable_card(
    ui: &mut Ui,
    colors: &UiColors,
    add_contents: impl FnOnce(&mut Ui),
) -> Response {
    Frame::new()
        .fill(colors.card)
        .stroke(Stroke::new(1.0, colors.card_border))
        .corner_radius(CornerRadius::same(UI_CONFIG.card_radius))
        .inner_margin(Margin::same(16))
        .show(ui, add_contents)
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
}

/// Title, tagline and the two call-to-action buttons
pub struct HeroPanel<'a> {
    colors: &'a UiColors,
    moon_phase: &'a str,
    buy_pressed: bool,
}

impl<'a> HeroPanel<'a> {
    pub fn new(colors: &'a UiColors, moon_phase: &'a str, buy_pressed: bool) -> Self {
        Self {
            colors,
            moon_phase,
            buy_pressed,
        }
    }
}

impl Panel for HeroPanel<'_> {
    type Event = PageEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let colors = self.colors;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new(format!("🪙 {}", UI_TEXT.coin_name))
                    .size(44.0)
                    .strong()
                    .color(colors.heading),
            );
            ui.label(RichText::new(UI_TEXT.ticker).monospace().color(colors.subsection_heading));
            ui.add_space(8.0);
            ui.label(RichText::new(UI_TEXT.tagline).size(18.0).color(colors.text));
            ui.add_space(8.0);
            ui.metric(colors, UI_TEXT.moon_phase_label, self.moon_phase, colors.primary);
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let base = vec2(200.0, 48.0);
                let buy_size = if self.buy_pressed {
                    base * UI_CONFIG.pressed_scale
                } else {
                    base
                };
                let total = base.x * 2.0 + ui.spacing().item_spacing.x;
                ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

                let buy = ui.add(
                    Button::new(
                        RichText::new(UI_TEXT.buy_button)
                            .size(18.0)
                            .strong()
                            .color(colors.primary_text),
                    )
                    .fill(colors.primary)
                    .corner_radius(CornerRadius::same(24))
                    .min_size(buy_size),
                );
                if buy.clicked() {
                    events.push(PageEvent::BuyClicked { anchor: buy.rect });
                }

                let whitepaper = ui.add(
                    Button::new(
                        RichText::new(UI_TEXT.whitepaper_button)
                            .size(18.0)
                            .color(colors.secondary_text),
                    )
                    .fill(colors.secondary)
                    .corner_radius(CornerRadius::same(24))
                    .min_size(base),
                );
                if whitepaper.clicked() {
                    events.push(PageEvent::WhitepaperClicked);
                }
            });
        });

        events
    }
}

/// Heading, pie chart and legend
pub struct TokenomicsPanel<'a> {
    colors: &'a UiColors,
    chart: &'a mut ChartView,
    filter: &'a PageFilter,
    now: AppInstant,
}

impl<'a> TokenomicsPanel<'a> {
    pub fn new(
        colors: &'a UiColors,
        chart: &'a mut ChartView,
        filter: &'a PageFilter,
        now: AppInstant,
    ) -> Self {
        Self {
            colors,
            chart,
            filter,
            now,
        }
    }
}

impl Panel for TokenomicsPanel<'_> {
    type Event = PageEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<PageEvent> {
        let colors = self.colors;
        ui.label_header(colors, UI_TEXT.tokenomics_heading);
        ui.label_subdued(colors, UI_TEXT.tokenomics_blurb);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            self.chart.show(ui, self.filter, self.now);
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.add_space(100.0);
                self.chart.legend(ui, self.filter, self.now, colors.text);
            });
        });

        Vec::new()
    }
}

/// Clickable team member cards
pub struct TeamPanel<'a> {
    colors: &'a UiColors,
}

impl<'a> TeamPanel<'a> {
    pub fn new(colors: &'a UiColors) -> Self {
        Self { colors }
    }
}

impl Panel for TeamPanel<'_> {
    type Event = PageEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let colors = self.colors;

        ui.label_header(colors, UI_TEXT.team_heading);
        ui.label_subdued(colors, UI_TEXT.team_hint);
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for (index, member) in UI_TEXT.team_members.iter().enumerate() {
                let card = clickable_card(ui, colors, |ui| {
                    ui.set_width(240.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(member.avatar).size(40.0));
                        ui.label(RichText::new(member.name).strong().color(colors.text));
                        ui.label_subdued(colors, member.role);
                    });
                });
                if card.clicked() {
                    events.push(PageEvent::TeamMemberClicked {
                        index,
                        anchor: card.rect,
                    });
                }
            }
        });

        events
    }
}

/// Clickable roadmap milestones
pub struct RoadmapPanel<'a> {
    colors: &'a UiColors,
}

impl<'a> RoadmapPanel<'a> {
    pub fn new(colors: &'a UiColors) -> Self {
        Self { colors }
    }
}

impl Panel for RoadmapPanel<'_> {
    type Event = PageEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let colors = self.colors;

        ui.label_header(colors, UI_TEXT.roadmap_heading);
        ui.label_subdued(colors, UI_TEXT.roadmap_hint);
        ui.add_space(12.0);

        for item in UI_TEXT.roadmap {
            let card = clickable_card(ui, colors, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(item.phase)
                            .monospace()
                            .strong()
                            .color(colors.primary),
                    );
                    ui.vertical(|ui| {
                        ui.label_subheader(colors, item.title);
                        ui.label(RichText::new(item.detail).color(colors.text));
                    });
                });
            });
            if card.clicked() {
                events.push(PageEvent::RoadmapItemClicked { anchor: card.rect });
            }
            ui.add_space(8.0);
        }

        events
    }
}

/// Social links and the footer disclaimer
pub struct SocialPanel<'a> {
    colors: &'a UiColors,
}

impl<'a> SocialPanel<'a> {
    pub fn new(colors: &'a UiColors) -> Self {
        Self { colors }
    }
}

impl Panel for SocialPanel<'_> {
    type Event = PageEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let colors = self.colors;

        ui.label_header(colors, UI_TEXT.social_heading);
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for platform in SocialPlatform::iter() {
                // The visible label doubles as the lookup key for its message
                let label = platform.to_string();
                let link = ui
                    .add(
                        Button::new(
                            RichText::new(format!("{}  {}", platform.icon(), label))
                                .color(colors.heading),
                        )
                        .fill(colors.card)
                        .stroke(Stroke::new(1.0, colors.card_border))
                        .corner_radius(CornerRadius::same(20)),
                    )
                    .on_hover_cursor(CursorIcon::PointingHand);
                if link.clicked() {
                    events.push(PageEvent::SocialLinkClicked {
                        label,
                        anchor: link.rect,
                    });
                }
            }
        });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label_subdued(colors, UI_TEXT.footer_disclaimer);
        });

        events
    }
}
