//! Configuration module for the Example Coin page.

pub mod chart;
pub mod konami;
pub mod options;
pub mod overlay;
pub mod timing;

pub mod debug;

// Re-export commonly used items
pub use chart::{CHART_CONFIG, ChartSlice};
pub use konami::{KONAMI_BUFFER_LEN, KONAMI_HUE_ROTATION_DEG, KONAMI_SEQUENCE};
pub use options::PageOptions;
pub use overlay::{BRAND_GRADIENT, FLOATING_STAT_CONFIG, MODAL_CONFIG, TOOLTIP_CONFIG};
pub use timing::{CHANCES, TIMING};
