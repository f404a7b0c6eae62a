//! Browser entry point.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(level);

    log::info!("mounting mary frontend");
    leptos::mount::mount_to_body(App);
}
