//! Timer durations and per-tick probabilities for every time-driven effect.

use std::time::Duration;

pub struct TimingConfig {
    /// How long a tooltip stays fully visible before it starts fading out
    pub tooltip_duration: Duration,
    /// Fade in / fade out transition of a tooltip
    pub tooltip_fade: Duration,
    /// Vertical slide (px) applied while a tooltip fades in or out
    pub tooltip_slide_px: f32,
    /// Modal slide-in when a dialog opens
    pub modal_slide_in: Duration,
    /// Period of the floating statistics tick
    pub stat_interval: Duration,
    /// Period of the console message tick
    pub message_interval: Duration,
    /// Total lifetime of one floating stat (matches its slide-and-fade animation)
    pub stat_lifetime: Duration,
    /// How long the Konami hue rotation stays applied
    pub konami_revert: Duration,
    /// Transition time of the page filter in both directions
    pub filter_transition: Duration,
    /// "Pressed" feedback on the buy button
    pub button_feedback: Duration,
}

pub const TIMING: TimingConfig = TimingConfig {
    tooltip_duration: Duration::from_millis(3_000),
    tooltip_fade: Duration::from_millis(300),
    tooltip_slide_px: 10.0,
    modal_slide_in: Duration::from_millis(300),
    stat_interval: Duration::from_millis(5_000),
    message_interval: Duration::from_millis(60_000),
    stat_lifetime: Duration::from_millis(6_000),
    konami_revert: Duration::from_millis(5_000),
    filter_transition: Duration::from_millis(500),
    button_feedback: Duration::from_millis(150),
};

/// Probability that a tick actually produces something
pub struct ChanceConfig {
    pub stat_spawn: f64,
    pub console_message: f64,
}

pub const CHANCES: ChanceConfig = ChanceConfig {
    stat_spawn: 0.3,
    console_message: 0.1,
};
