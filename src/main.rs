#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use example_coin::{PageOptions, run_app};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*; // <--- REQUIRED for .dyn_into()

// --- WASM SPECIFIC CODE ---

// Keeps the module exports alive for wasm-bindgen
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The compiler still wants a main() for the binary target even though 'start' is the entry
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    // C. Find the canvas the page mounts on
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window
        .document()
        .ok_or("no document on the global window")?;

    // Same effect as `@media (prefers-reduced-motion: reduce)`
    let prefers_reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    let page_options = PageOptions::for_browser(prefers_reduced_motion);

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // D. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| Ok(run_app(cc, page_options))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use example_coin::Cli;
    use example_coin::ui::config::UI_TEXT;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let page_options = PageOptions::from(&args);

    // C. Run Native App
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1024.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, page_options))),
    )
}
