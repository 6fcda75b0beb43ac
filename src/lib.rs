// ============================================================================
// QUIZ WEB - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que construyen DOM a partir del estado
// - ViewModels: lógica de cada página, genéricos sobre QuizApi
// - Services: SOLO comunicación API
// - State: sesión (sessionStorage), máquina de progresión, estado de página
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App de esta página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Quiz Web - Rust + MVVM ({}, backend {})",
        CONFIG.environment,
        CONFIG.backend_url()
    );

    let mut app = App::new()?;
    if !app.guard()? {
        return Ok(());
    }
    app.render()?;
    app.start();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Re-render completo de la página actual
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: un render en curso no se interrumpe
        match app_cell.try_borrow_mut() {
            Ok(mut guard) => match guard.as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            },
            Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se omite"),
        }
    });
}
