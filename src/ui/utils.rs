use colorgrad::Gradient;
use eframe::egui::{Color32, Context, Event, Key, Mesh, Rect, Shape, Visuals};

use crate::config::BRAND_GRADIENT;
use crate::domain::PageFilter;
use crate::ui::config::UiColors;
use crate::utils::app_time::{AppInstant, now};

#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Sets up custom visuals for the entire page
pub fn setup_custom_visuals(ctx: &Context, colors: &UiColors) {
    let mut visuals = Visuals::light();

    visuals.panel_fill = colors.page;
    visuals.window_fill = colors.card;
    visuals.extreme_bg_color = colors.card;
    visuals.override_text_color = Some(colors.text);

    visuals.widgets.noninteractive.fg_stroke.color = colors.text;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;
    visuals.widgets.active.fg_stroke.color = colors.heading;
    visuals.selection.bg_fill = colors.secondary;

    ctx.set_visuals(visuals);
}

/// Keys pressed this frame, in order, auto-repeats included.
pub fn pressed_keys(ctx: &Context) -> Vec<Key> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::Key { key, pressed: true, .. } => Some(*key),
                _ => None,
            })
            .collect()
    })
}

/// Page visibility transitions, each stamped with when it happened.
///
/// eframe stops calling `update` while the page is hidden, so the browser
/// build listens for `visibilitychange` and queues what it saw until the next
/// frame drains it.
#[cfg(target_arch = "wasm32")]
pub struct VisibilityWatcher {
    changes: Rc<RefCell<Vec<(bool, AppInstant)>>>,
    listener: Option<(web_sys::Document, Closure<dyn FnMut()>)>,
}

#[cfg(target_arch = "wasm32")]
impl VisibilityWatcher {
    pub fn new(ctx: &Context) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let listener = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                let queue = Rc::clone(&changes);
                let ctx = ctx.clone();
                let doc = document.clone();
                let closure = Closure::<dyn FnMut()>::new(move || {
                    queue.borrow_mut().push((!doc.hidden(), now()));
                    ctx.request_repaint();
                });
                match document.add_event_listener_with_callback(
                    "visibilitychange",
                    closure.as_ref().unchecked_ref(),
                ) {
                    Ok(()) => Some((document, closure)),
                    Err(e) => {
                        log::warn!("Cannot watch page visibility: {:?}", e);
                        None
                    }
                }
            });

        Self { changes, listener }
    }

    pub fn drain(&mut self, _ctx: &Context) -> Vec<(bool, AppInstant)> {
        self.changes.borrow_mut().drain(..).collect()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        if let Some((document, closure)) = self.listener.take() {
            let _ = document.remove_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Page visibility transitions, each stamped with when it was noticed.
/// Natively the page counts as hidden while the window is minimized.
#[cfg(not(target_arch = "wasm32"))]
pub struct VisibilityWatcher {
    visible: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl VisibilityWatcher {
    pub fn new(_ctx: &Context) -> Self {
        Self { visible: true }
    }

    pub fn drain(&mut self, ctx: &Context) -> Vec<(bool, AppInstant)> {
        let visible = !ctx.input(|i| i.viewport().minimized.unwrap_or(false));
        if visible == self.visible {
            return Vec::new();
        }
        self.visible = visible;
        vec![(visible, now())]
    }
}

/// The whole drawable area
#[allow(deprecated)]
pub fn viewport_rect(ctx: &Context) -> Rect {
    ctx.screen_rect()
}

/// The brand orange to yellow gradient. Falls back to a flat brand colour if
/// the gradient cannot be built.
pub struct BrandGradient {
    gradient: Option<colorgrad::LinearGradient>,
}

impl Default for BrandGradient {
    fn default() -> Self {
        Self::new()
    }
}

impl BrandGradient {
    pub fn new() -> Self {
        let gradient = colorgrad::GradientBuilder::new()
            .html_colors(BRAND_GRADIENT)
            .build::<colorgrad::LinearGradient>();
        match gradient {
            Ok(gradient) => Self {
                gradient: Some(gradient),
            },
            Err(e) => {
                log::warn!("Brand gradient unavailable, using flat colour: {}", e);
                Self { gradient: None }
            }
        }
    }

    pub fn at(&self, t: f32) -> Color32 {
        match &self.gradient {
            Some(gradient) => to_egui_color(gradient.at(t)),
            None => Color32::from_rgb(0xff, 0x6b, 0x35),
        }
    }

    /// A 135 degree gradient filling `rect`: start colour top-left, end colour
    /// bottom-right.
    pub fn shape(&self, rect: Rect, filter: &PageFilter, now: AppInstant, opacity: f32) -> Shape {
        let color = |t: f32| filter.apply(self.at(t), now).gamma_multiply(opacity);

        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), color(0.0));
        mesh.colored_vertex(rect.right_top(), color(0.5));
        mesh.colored_vertex(rect.right_bottom(), color(1.0));
        mesh.colored_vertex(rect.left_bottom(), color(0.5));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        Shape::mesh(mesh)
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: Key, pressed: bool, repeat: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: eframe::egui::Modifiers::NONE,
        }
    }

    #[test]
    fn held_keys_report_every_auto_repeat() {
        let ctx = Context::default();
        let input = eframe::egui::RawInput {
            events: vec![
                key_event(Key::ArrowUp, true, false),
                key_event(Key::ArrowUp, true, true),
                key_event(Key::ArrowUp, false, false),
                key_event(Key::B, true, false),
            ],
            ..Default::default()
        };

        let mut keys = Vec::new();
        let _ = ctx.run(input, |ctx| keys = pressed_keys(ctx));
        assert_eq!(keys, vec![Key::ArrowUp, Key::ArrowUp, Key::B]);
    }

    #[test]
    fn gradient_runs_from_orange_to_yellow() {
        let gradient = BrandGradient::new();
        assert_eq!(gradient.at(0.0), Color32::from_rgb(0xff, 0x6b, 0x35));
        assert_eq!(gradient.at(1.0), Color32::from_rgb(0xff, 0xd2, 0x3f));
    }
}
