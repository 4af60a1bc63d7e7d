#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use realticker::{API, ApiSettings, Cli, TaskSpawner, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Base URL from `window.REALTICKER_API_BASE`, if the hosting page sets one.
#[cfg(target_arch = "wasm32")]
fn web_api_settings(window: &web_sys::Window) -> ApiSettings {
    let configured = js_sys::Reflect::get(window, &JsValue::from_str(API.base_url_js_global))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|url| !url.trim().is_empty());

    match configured {
        Some(url) => {
            log::info!("Using backend from {}: {}", API.base_url_js_global, url);
            ApiSettings::default().with_base_url(url)
        }
        None => ApiSettings::default(),
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚀 RealTicker starting in WASM mode...");

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    let window = web_sys::window().expect("no global `window` exists");
    let settings = web_api_settings(&window);
    let document = window.document().expect("should have a document on window");

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .expect("Failed to find canvas with id 'the_canvas_id'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // C. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| Ok(run_app(cc, &settings, TaskSpawner::new(), None)?)),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use realticker::APP_STATE_PATH;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

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
    let settings = args.api_settings();
    log::info!(
        "Backend: {} (timeout {}s)",
        settings.base_url,
        settings.request_timeout.as_secs()
    );

    // C. Runtime for backend requests. Lives as long as the window.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let spawner = TaskSpawner::new(rt.handle().clone());

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "RealTicker Dashboard",
        options,
        Box::new(move |cc| Ok(run_app(cc, &settings, spawner, args.months)?)),
    )
}
