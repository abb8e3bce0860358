//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the page
//! console stays limited to the jokes we actually want people to read.

/// Emit UI interaction logs (buy clicks, modal open/close, team/social lookups).
pub const PRINT_UI_INTERACTIONS: bool = false;

/// Emit scheduler arm/fire/cancel/pause traces.
pub const PRINT_SCHEDULER_EVENTS: bool = false;

/// Emit visibility transitions reported by the viewport.
pub const PRINT_VISIBILITY_CHANGES: bool = true;

/// Emit shutdown app messages.
pub const PRINT_SHUTDOWN: bool = false;
