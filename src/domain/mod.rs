// Page-level value types: overlays, the easter egg and chart geometry.
// Nothing in here touches the egui context.
pub mod chart;
pub mod floating_stat;
pub mod konami;
pub mod modal;
pub mod page_filter;
pub mod tooltip;

// Re-export commonly used types
pub use floating_stat::FloatingStat;
pub use konami::KonamiDetector;
pub use modal::{CloseReason, Modal, SlideIn};
pub use page_filter::PageFilter;
pub use tooltip::{OverlayId, Tooltip, TooltipPhase, position_tooltip};
