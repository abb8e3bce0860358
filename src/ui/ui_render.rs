use eframe::egui::{
    Align, Align2, Area, Button, CentralPanel, Color32, Context, CornerRadius, Frame, Id, Label,
    Layout, Margin, Modal, Order, RichText, ScrollArea, Shape, Ui, vec2,
};

use crate::config::{FLOATING_STAT_CONFIG, MODAL_CONFIG, TOOLTIP_CONFIG};
use crate::content::{ContentBlock, ModalContent};
use crate::domain::{CloseReason, position_tooltip};
use crate::engine::PageEvent;
use crate::ui::config::{UI_CONFIG, UI_TEXT, UiColors};
use crate::ui::ui_panels::{HeroPanel, Panel, RoadmapPanel, SocialPanel, TeamPanel, TokenomicsPanel};
use crate::ui::utils::viewport_rect;
use crate::utils::app_time::AppInstant;

use super::app::ExampleCoinApp;

impl ExampleCoinApp {
    /// The scrolling page itself. Returns the clicks it saw.
    pub(super) fn render_page(
        &mut self,
        ctx: &Context,
        colors: &UiColors,
        now: AppInstant,
    ) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let state = self.controller.state();
        let filter = state.page_filter;

        CentralPanel::default()
            .frame(Frame::new().fill(colors.page))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .enable_scrolling(!state.scroll_locked)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(UI_CONFIG.content_width);
                            ui.with_layout(
                                Layout::top_down(Align::Min),
                                |ui| {
                                    events.extend(
                                        HeroPanel::new(
                                            colors,
                                            state.current_moon_phase,
                                            state.buy_button_pressed,
                                        )
                                        .render(ui),
                                    );
                                    ui.add_space(UI_CONFIG.section_spacing);
                                    events.extend(
                                        TokenomicsPanel::new(
                                            colors,
                                            &mut self.chart_view,
                                            &filter,
                                            now,
                                        )
                                        .render(ui),
                                    );
                                    ui.add_space(UI_CONFIG.section_spacing);
                                    events.extend(TeamPanel::new(colors).render(ui));
                                    ui.add_space(UI_CONFIG.section_spacing);
                                    events.extend(RoadmapPanel::new(colors).render(ui));
                                    ui.add_space(UI_CONFIG.section_spacing);
                                    events.extend(SocialPanel::new(colors).render(ui));
                                    ui.add_space(UI_CONFIG.section_spacing);
                                },
                            );
                        });
                    });
            });

        events
    }

    /// Draws the active tooltip. The first frame lays it out invisibly and
    /// reports its size so the next frame can place it.
    pub(super) fn render_tooltip(&mut self, ctx: &Context, now: AppInstant) {
        let Some(tooltip) = self.controller.state().active_tooltip.as_ref() else {
            return;
        };

        let viewport = viewport_rect(ctx);
        let (opacity, offset) = tooltip.appearance(now);
        let pos = match tooltip.measured {
            Some(size) => {
                position_tooltip(
                    tooltip.anchor,
                    size,
                    viewport,
                    TOOLTIP_CONFIG.viewport_margin,
                    TOOLTIP_CONFIG.anchor_gap,
                ) + vec2(0.0, offset)
            }
            None => tooltip.anchor.left_top(),
        };

        let filter = self.controller.state().page_filter;
        let id = tooltip.id;
        let needs_measure = tooltip.measured.is_none();

        let response = Area::new(Id::new("custom_tooltip").with(id.0))
            .order(Order::Tooltip)
            .fixed_pos(pos)
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                Frame::new()
                    .fill(filter.apply(TOOLTIP_CONFIG.background, now))
                    .corner_radius(CornerRadius::same(TOOLTIP_CONFIG.corner_radius))
                    .inner_margin(Margin::symmetric(
                        TOOLTIP_CONFIG.padding_x,
                        TOOLTIP_CONFIG.padding_y,
                    ))
                    .shadow(eframe::egui::epaint::Shadow {
                        offset: [0, 5],
                        blur: 20,
                        spread: 0,
                        color: Color32::from_black_alpha(77),
                    })
                    .show(ui, |ui| {
                        ui.set_max_width(TOOLTIP_CONFIG.max_width);
                        ui.add(
                            Label::new(
                                RichText::new(tooltip.message.as_str())
                                    .size(TOOLTIP_CONFIG.font_size)
                                    .color(TOOLTIP_CONFIG.text_color),
                            )
                            .wrap(),
                        );
                    });
            })
            .response;

        if needs_measure {
            self.controller.record_tooltip_size(id, response.rect.size(), now);
        }
    }

    pub(super) fn render_floating_stats(&self, ctx: &Context, now: AppInstant) {
        let state = self.controller.state();
        if state.floating_stats.is_empty() {
            return;
        }

        let viewport = viewport_rect(ctx);
        for stat in &state.floating_stats {
            let (right, opacity) = stat.appearance(now);
            let top = viewport.top() + viewport.height() * stat.top_frac as f32;
            let anchor = eframe::egui::pos2(viewport.right() - right, top);

            Area::new(Id::new("floating_stat").with(stat.id.0))
                .order(Order::Middle)
                .pivot(Align2::RIGHT_TOP)
                .fixed_pos(anchor)
                .interactable(false)
                .show(ctx, |ui| {
                    ui.set_opacity(opacity);
                    let background = ui.painter().add(Shape::Noop);
                    let inner = Frame::new()
                        .inner_margin(Margin::symmetric(15, 10))
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(stat.value.to_string())
                                        .strong()
                                        .size(FLOATING_STAT_CONFIG.value_size)
                                        .color(Color32::WHITE),
                                );
                                ui.label(
                                    RichText::new(stat.label())
                                        .size(FLOATING_STAT_CONFIG.label_size)
                                        .color(Color32::WHITE),
                                );
                            });
                        });
                    ui.painter().set(
                        background,
                        self.gradient
                            .shape(inner.response.rect, &state.page_filter, now, opacity),
                    );
                });
        }
    }

    /// Backdrop and dialog. Backdrop clicks and the × button are reported as
    /// events; Escape reaches the controller as a key press.
    pub(super) fn render_modal(&mut self, ctx: &Context, colors: &UiColors, now: AppInstant) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let focus_close = self.controller.take_modal_focus();
        let state = self.controller.state();
        let Some(modal) = state.active_modal.as_ref() else {
            return events;
        };

        let viewport = viewport_rect(ctx);
        let slide = modal.appearance(now);
        let width = (viewport.width() - 2.0 * MODAL_CONFIG.outer_margin)
            .min(MODAL_CONFIG.max_width)
            .max(0.0)
            * slide.scale;
        let body_height = viewport.height() * MODAL_CONFIG.body_max_height_frac;

        let id = Id::new("custom_modal").with(modal.id.0);
        let dialog = Modal::new(id)
            .area(Modal::default_area(id).anchor(Align2::CENTER_CENTER, vec2(0.0, slide.offset_y)))
            .backdrop_color(MODAL_CONFIG.backdrop)
            .frame(
                Frame::new()
                    .fill(colors.modal_body.gamma_multiply(slide.opacity))
                    .corner_radius(CornerRadius::same(MODAL_CONFIG.corner_radius)),
            )
            .show(ctx, |ui| {
                ui.set_opacity(slide.opacity);
                ui.set_width(width);

                // Header: gradient strip with the title and the close button
                let background = ui.painter().add(Shape::Noop);
                let header = Frame::new()
                    .inner_margin(Margin::same(MODAL_CONFIG.header_padding))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(modal.title.as_str())
                                    .size(MODAL_CONFIG.title_size)
                                    .strong()
                                    .color(Color32::WHITE),
                            );
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let highlight = ui.painter().add(Shape::Noop);
                                let close = ui
                                    .add(
                                        Button::new(
                                            RichText::new("×")
                                                .size(MODAL_CONFIG.close_size)
                                                .color(Color32::WHITE),
                                        )
                                        .frame(false),
                                    )
                                    .on_hover_text(UI_TEXT.modal_close_label);
                                if focus_close {
                                    close.request_focus();
                                }
                                if let Some(color) =
                                    close_button_highlight(close.hovered(), close.has_focus())
                                {
                                    let radius = close.rect.width().max(close.rect.height()) / 2.0;
                                    ui.painter().set(
                                        highlight,
                                        Shape::circle_filled(close.rect.center(), radius, color),
                                    );
                                }
                                if close.clicked() {
                                    events.push(PageEvent::ModalClosed(CloseReason::CloseButton));
                                }
                            });
                        });
                    });
                ui.painter().set(
                    background,
                    self.gradient
                        .shape(header.response.rect, &state.page_filter, now, slide.opacity),
                );

                Frame::new()
                    .inner_margin(Margin::same(MODAL_CONFIG.header_padding))
                    .show(ui, |ui| {
                        ScrollArea::vertical()
                            .id_salt("modal_body")
                            .max_height(body_height)
                            .show(ui, |ui| render_modal_content(ui, &modal.content, colors));
                    });
            });

        if dialog.backdrop_response.clicked() {
            events.push(PageEvent::ModalClosed(CloseReason::Backdrop));
        }

        events
    }
}

/// Round backdrop of the close button, shown while it is hovered or focused.
fn close_button_highlight(hovered: bool, focused: bool) -> Option<Color32> {
    (hovered || focused).then_some(MODAL_CONFIG.close_highlight)
}

fn render_modal_content(ui: &mut Ui, content: &ModalContent, colors: &UiColors) {
    for block in content.blocks() {
        match block {
            ContentBlock::Title(text) => {
                ui.label(RichText::new(*text).size(20.0).strong().color(colors.heading));
                ui.add_space(8.0);
            }
            ContentBlock::Heading(text) => {
                ui.add_space(10.0);
                ui.label(RichText::new(*text).size(16.0).strong().color(colors.subsection_heading));
                ui.add_space(4.0);
            }
            ContentBlock::Paragraph(text) => {
                ui.add(Label::new(RichText::new(*text).color(colors.text)).wrap());
            }
            ContentBlock::Emphasis(text) => {
                ui.add(Label::new(RichText::new(*text).italics().color(colors.text)).wrap());
            }
            ContentBlock::Bullets(items) => {
                for item in items {
                    ui.add(Label::new(RichText::new(format!("•  {}", item)).color(colors.text)).wrap());
                }
            }
            ContentBlock::Numbered(items) => {
                for (n, item) in items.iter().enumerate() {
                    ui.add(
                        Label::new(RichText::new(format!("{}.  {}", n + 1, item)).color(colors.text))
                            .wrap(),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_button_is_highlighted_when_hovered_or_focused() {
        assert_eq!(close_button_highlight(false, false), None);
        assert_eq!(close_button_highlight(true, false), Some(MODAL_CONFIG.close_highlight));
        assert_eq!(close_button_highlight(false, true), Some(MODAL_CONFIG.close_highlight));
    }
}
