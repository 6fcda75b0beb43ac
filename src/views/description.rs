// ============================================================================
// DESCRIPTION VIEW - description.html
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{current_query_param, ElementBuilder};
use crate::state::AppState;
use crate::utils::QUIZ_ID_PARAM;
use crate::viewmodels::DescriptionViewModel;
use crate::views::shared::{follow, render_page_shell};

pub fn load_description(state: &AppState) {
    state.set_loading(true);
    let linked_quiz_id = current_query_param(QUIZ_ID_PARAM);
    let state = state.clone();
    spawn_local(async move {
        let vm = DescriptionViewModel::new(state.api.clone(), state.session.clone());
        match vm.load(linked_quiz_id.as_deref()).await {
            Ok(quiz) => {
                *state.quiz.borrow_mut() = Some(quiz);
                state.set_loading(false);
            }
            Err(e) => state.show_error("DESCRIPTION", &e),
        }
    });
}

pub fn render_description(state: &AppState) -> Result<Element, JsValue> {
    let quiz = state.quiz.borrow().clone();
    let content = match quiz {
        Some(quiz) => {
            let start = {
                let state = state.clone();
                ElementBuilder::new("button")?
                    .class("btn-start")
                    .attr("type", "button")?
                    .text("Start Quiz")
                    .on_click(move |_| start_quiz(&state))?
                    .build()
            };
            let description = if quiz.description.trim().is_empty() {
                "No description available."
            } else {
                quiz.description.as_str()
            };
            Some(
                ElementBuilder::new("section")?
                    .class("quiz-description")
                    .child(ElementBuilder::new("h2")?.text(&quiz.title).build())?
                    .child(ElementBuilder::new("p")?.id("description")?.text(description).build())?
                    .child(start)?
                    .build(),
            )
        }
        None => None,
    };
    render_page_shell(state, "Quiz Description", content)
}

fn start_quiz(state: &AppState) {
    if state.is_loading() {
        return;
    }
    state.clear_message();
    state.set_loading(true);
    let state = state.clone();
    spawn_local(async move {
        let vm = DescriptionViewModel::new(state.api.clone(), state.session.clone());
        follow(&state, "DESCRIPTION", vm.start_quiz().await);
    });
}
