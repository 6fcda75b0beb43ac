pub mod shared;
pub mod login;
pub mod home;
pub mod description;
pub mod question;
pub mod results;
pub mod attempts;
pub mod teacher;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::AppState;
use crate::utils::Page;

pub use login::render_login;
pub use home::{load_home, render_home};
pub use description::{load_description, render_description};
pub use question::{load_question, render_question};
pub use results::{load_results, render_results};
pub use attempts::{load_attempts, render_attempts};
pub use teacher::{load_teacher, render_teacher};

/// Vista de la página actual
pub fn render_page(state: &AppState) -> Result<Element, JsValue> {
    match state.page {
        Page::Login => render_login(state),
        Page::Home => render_home(state),
        Page::Description => render_description(state),
        Page::Question => render_question(state),
        Page::Results => render_results(state),
        Page::Attempts => render_attempts(state),
        Page::Teacher => render_teacher(state),
    }
}

/// Peticiones iniciales de la página (una vez, al arrancar)
pub fn load_page(state: &AppState) {
    match state.page {
        Page::Login => {}
        Page::Home => load_home(state),
        Page::Description => load_description(state),
        Page::Question => load_question(state),
        Page::Results => load_results(state),
        Page::Attempts => load_attempts(state),
        Page::Teacher => load_teacher(state),
    }
}
