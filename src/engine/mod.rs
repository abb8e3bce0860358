pub mod core;
pub mod messages;
pub mod scheduler;
pub mod state;

// Re-export key components
pub use core::PageController;
pub use messages::PageEvent;
pub use scheduler::{Scheduler, TaskId, TaskKind};
pub use state::AppState;
