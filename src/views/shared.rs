// ============================================================================
// SHARED VIEWS - Cabecera, mensajes y helpers comunes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{alert, navigate_to, ElementBuilder};
use crate::error::{ClientError, ClientResult};
use crate::state::AppState;
use crate::utils::Page;
use crate::viewmodels::LoginViewModel;

/// Informa de un fallo: alerta bloqueante si es de validación, mensaje en página siempre
pub fn report_error(state: &AppState, context: &str, error: &ClientError) {
    if matches!(error, ClientError::Validation(_)) {
        alert(&error.user_message());
    }
    state.show_error(context, error);
}

/// Navega si la acción devolvió una página; si falló, informa del error
pub fn follow(state: &AppState, context: &str, result: ClientResult<Page>) {
    match result {
        Ok(page) => {
            if let Err(e) = navigate_to(page) {
                log::error!("❌ [{}] Navegación fallida: {:?}", context, e);
            }
        }
        Err(e) => report_error(state, context, &e),
    }
}

/// Cabecera con navegación según el rol
pub fn render_header(state: &AppState, title: &str) -> Result<Element, JsValue> {
    let ctx = state.session.snapshot();
    let nav = ElementBuilder::new("nav")?.class("app-nav").build();

    if ctx.is_logged_in() {
        let home = if ctx.is_teacher() { Page::Teacher } else { Page::Home };
        let links = [(home, "Home"), (Page::Attempts, "My Attempts")];
        for (page, label) in links {
            if ctx.is_teacher() && page == Page::Attempts {
                continue;
            }
            let link = ElementBuilder::new("a")?
                .class(if page == state.page { "nav-link active" } else { "nav-link" })
                .attr("href", page.file_name())?
                .text(label)
                .build();
            nav.append_child(&link)?;
        }

        let logout = {
            let state = state.clone();
            ElementBuilder::new("button")?
                .class("btn-logout")
                .attr("type", "button")?
                .text("Log out")
                .on_click(move |_| {
                    let vm = LoginViewModel::new(state.api.clone(), state.session.clone());
                    follow(&state, "LOGOUT", vm.logout());
                })?
                .build()
        };
        nav.append_child(&logout)?;
    }

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .child(nav)?
        .build())
}

/// Mensaje de error/aviso y confirmación, si los hay
pub fn render_messages(state: &AppState) -> Result<Option<Element>, JsValue> {
    let message = state.message.borrow().clone();
    let notice = state.notice.borrow().clone();
    if message.is_none() && notice.is_none() {
        return Ok(None);
    }

    let container = ElementBuilder::new("div")?.class("messages").build();
    if let Some(message) = message {
        container.append_child(
            &ElementBuilder::new("p")?
                .class("message error")
                .attr("role", "alert")?
                .text(&message)
                .build(),
        )?;
    }
    if let Some(notice) = notice {
        container.append_child(&ElementBuilder::new("p")?.class("message notice").text(&notice).build())?;
    }
    Ok(Some(container))
}

pub fn render_loading() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .class("loading")
        .text("Loading...")
        .build())
}

/// Contenedor estándar de página: cabecera + mensajes + contenido
pub fn render_page_shell(
    state: &AppState,
    title: &str,
    content: Option<Element>,
) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?
        .class("page")
        .child(render_header(state, title)?)?
        .build();
    if let Some(messages) = render_messages(state)? {
        page.append_child(&messages)?;
    }
    if state.is_loading() {
        let loading = render_loading()?;
        page.append_child(&loading)?;
    } else if let Some(content) = content {
        page.append_child(&content)?;
    }
    Ok(page)
}
