#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod content;
pub mod domain;
pub mod ui;
pub mod utils;

// The page controller: state, timers and event handling
pub mod engine;

// Re-export commonly used types
pub use config::PageOptions;
pub use engine::{PageController, PageEvent};
pub use ui::ExampleCoinApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hide the floating statistics (the prefers-reduced-motion analogue)
    #[arg(long, default_value_t = false)]
    pub reduced_motion: bool,

    /// Seed for the joke randomness, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<&Cli> for PageOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            reduced_motion: cli.reduced_motion,
            seed: cli.seed,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, options: PageOptions) -> Box<dyn eframe::App> {
    let app = ui::ExampleCoinApp::new(cc, options);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_map_onto_page_options() {
        let cli = Cli::parse_from(["example-coin", "--reduced-motion", "--seed", "42"]);
        let options = PageOptions::from(&cli);
        assert!(options.reduced_motion);
        assert_eq!(options.seed, Some(42));

        let defaults = PageOptions::from(&Cli::parse_from(["example-coin"]));
        assert_eq!(defaults.reduced_motion, PageOptions::default().reduced_motion);
        assert_eq!(defaults.seed, None);
    }
}
