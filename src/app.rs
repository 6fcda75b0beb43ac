// ============================================================================
// APP - Controlador de página
// ============================================================================
// Detecta la página por la URL, monta la vista en #app, lanza las
// peticiones iniciales y re-renderiza cuando cambia el estado.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, current_pathname, get_element_by_id, navigate_to};
use crate::error::ClientError;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::{Page, SessionStore, APP_ROOT_ID};
use crate::viewmodels::landing_page;
use crate::views::{load_page, render_page};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| ClientError::MissingElement(APP_ROOT_ID.to_string()))?;

        let pathname = current_pathname().unwrap_or_default();
        let page = Page::from_path(&pathname).unwrap_or_else(|| {
            log::warn!("⚠️ [APP] Ruta desconocida '{}', usando login", pathname);
            Page::Login
        });
        log::info!("📄 [APP] Página: {}", page.file_name());

        let state = AppState::new(page, SessionStore::browser(), ApiClient::new());

        // Batchear varias notificaciones seguidas en un solo render
        let scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Redirige si la sesión no corresponde a la página.
    /// Devuelve false si se ha navegado fuera.
    pub fn guard(&self) -> Result<bool, JsValue> {
        let ctx = self.state.session.snapshot();
        let page = self.state.page;

        if page.requires_login() && !ctx.is_logged_in() {
            log::info!("🔒 [APP] Sin sesión, redirigiendo al login");
            navigate_to(Page::Login)?;
            return Ok(false);
        }
        if page == Page::Login && ctx.is_logged_in() {
            navigate_to(landing_page(ctx.user_role))?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Peticiones iniciales de la página
    pub fn start(&self) {
        load_page(&self.state);
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_page(&self.state)?;
        append_child(&self.root, &view)
    }
}
