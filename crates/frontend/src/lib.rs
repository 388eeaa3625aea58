pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let config = match shared::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            _ = console_log::init_with_level(log::Level::Warn);
            log::error!("failed to load configuration: {:#}", e);
            leptos::mount::mount_to_body(move || {
                view! { <p class="startup-error">{format!("Could not start: {}", e)}</p> }
            });
            return;
        }
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.app.level());
    log::info!("{} starting", config.app.title);

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
