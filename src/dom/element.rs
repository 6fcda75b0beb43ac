// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::utils::{query_param, Page};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar un contenedor (los listeners de los hijos se liberan con ellos)
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Alerta bloqueante del navegador
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.alert_with_message(message) {
            log::warn!("⚠️ [DOM] alert() falló: {:?}", e);
        }
    }
}

/// `/carpeta/question.html` de la URL actual
pub fn current_pathname() -> Option<String> {
    window()?.location().pathname().ok()
}

/// Parámetro de la query de la URL actual
pub fn current_query_param(name: &str) -> Option<String> {
    let href = window()?.location().href().ok()?;
    query_param(&href, name)
}

/// Navega a otra página estática
pub fn navigate_to(page: Page) -> Result<(), JsValue> {
    log::info!("➡️ [NAV] {}", page.file_name());
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(page.file_name())
}
