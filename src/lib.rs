// ============================================================================
// IMOB WEB - FRONTEND DEL PORTAL INMOBILIARIO (RUST + WASM)
// ============================================================================
// Capas:
// - Models: Estructuras compartidas con el backend
// - Services: SOLO comunicación API
// - State: Sesión + listado con Rc<RefCell> y notificaciones
// - ViewModels: Lógica de cada pantalla (login, búsqueda, paneles)
// - App: Arranque y listeners del navegador
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod app;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para ver los panics en la consola del navegador
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(log::Level::Debug));
    }
    log::info!("🚀 Imob Web ({}) - API en {}", CONFIG.environment, CONFIG.backend_url());

    // Los closures de los listeners retienen los handles del estado
    let app = App::new();
    app.start()
}
