// ============================================================================
// QUESTION VIEW - question.html
// ============================================================================
// Se pinta entera desde QuizProgress; cada cambio de la máquina notifica al
// AppState y la App re-renderiza.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::error::ClientError;
use crate::services::ApiClient;
use crate::state::{ActionMode, AppState, Phase, QuizProgress};
use crate::utils::Page;
use crate::viewmodels::QuizViewModel;
use crate::views::shared::{follow, render_page_shell, report_error};

fn view_model(state: &AppState) -> QuizViewModel<ApiClient> {
    QuizViewModel::new(
        state.api.clone(),
        state.session.clone(),
        state.progress.clone(),
    )
}

pub fn load_question(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        match view_model(&state).load().await {
            Ok(()) => {
                if state.progress.with(QuizProgress::is_finished) {
                    follow(&state, "QUIZ", Ok(Page::Results));
                }
            }
            Err(e) => state.show_error("QUIZ", &e),
        }
    });
}

pub fn render_question(state: &AppState) -> Result<Element, JsValue> {
    let progress = state.progress.get();
    let content = match progress.phase() {
        Phase::Loading if state.message.borrow().is_none() => {
            Some(ElementBuilder::new("p")?.class("loading").text("Loading question...").build())
        }
        Phase::Loading | Phase::Finished => None,
        Phase::AwaitingAnswer { question, .. } | Phase::ShowingEvaluation { question, .. } => {
            let options = ElementBuilder::new("div")?.class("options").build();
            let locked = progress.evaluation().is_some() || progress.is_busy();
            for (index, (text, mark)) in question
                .options
                .iter()
                .zip(progress.option_marks())
                .enumerate()
            {
                let button = {
                    let state = state.clone();
                    ElementBuilder::new("button")?
                        .class(mark.css_class())
                        .attr("type", "button")?
                        .data("index", &index.to_string())?
                        .text(text)
                        .disabled(locked)?
                        .on_click(move |_| select_option(&state, index))?
                        .build()
                };
                options.append_child(&button)?;
            }

            Some(
                ElementBuilder::new("section")?
                    .class("question")
                    .child(
                        ElementBuilder::new("p")?
                            .class("counter")
                            .id("question-counter")?
                            .text(&format!("Question {}", progress.counter()))
                            .build(),
                    )?
                    .child(ElementBuilder::new("h2")?.id("question-text")?.text(&question.question_text).build())?
                    .child(options)?
                    .child(render_action_button(state, &progress)?)?
                    .build(),
            )
        }
    };
    render_page_shell(state, "Quiz", content)
}

fn render_action_button(state: &AppState, progress: &QuizProgress) -> Result<Element, JsValue> {
    let mode = progress.action_mode();
    let mode_name = match mode {
        ActionMode::Submit => "submit",
        ActionMode::Next => "next",
        ActionMode::ViewResults => "results",
    };
    let state = state.clone();
    Ok(ElementBuilder::new("button")?
        .class("btn-action")
        .id("action-button")?
        .attr("type", "button")?
        .data("mode", mode_name)?
        .text(mode.label())
        .disabled(progress.is_busy())?
        .on_click(move |_| perform_action(&state))?
        .build())
}

fn select_option(state: &AppState, index: usize) {
    match view_model(state).select(index) {
        Ok(()) => {}
        Err(ClientError::InvalidTransition(reason)) => {
            log::debug!("⏳ [QUIZ] Selección ignorada: {}", reason);
        }
        Err(e) => report_error(state, "QUIZ", &e),
    }
}

fn perform_action(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        match view_model(&state).perform_action().await {
            Ok(Some(page)) => follow(&state, "QUIZ", Ok(page)),
            Ok(None) => state.clear_message(),
            // Doble click mientras hay una petición en curso
            Err(ClientError::InvalidTransition(reason)) => {
                log::debug!("⏳ [QUIZ] Acción ignorada: {}", reason);
            }
            Err(e) => report_error(&state, "QUIZ", &e),
        }
    });
}
