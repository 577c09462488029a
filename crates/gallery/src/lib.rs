//! Demo application for the `selectable` crate: three selection groups
//! and a switcher for the ambient style.

pub mod app;
pub mod presets;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn mount_gallery() {
    // `selectable` logs through the `log` facade
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let presets = presets::load_presets();
    log::info!("mounting selectable gallery with {}", presets::describe(&presets));
    leptos::mount::mount_to_body(move || view! { <App presets=presets /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    mount_gallery();
}
