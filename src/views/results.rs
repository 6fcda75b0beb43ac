// ============================================================================
// RESULTS VIEW - results.html
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::AnswerRecord;
use crate::state::AppState;
use crate::utils::Page;
use crate::viewmodels::{AttemptReport, ResultsViewModel};
use crate::views::shared::render_page_shell;

pub fn load_results(state: &AppState) {
    state.set_loading(true);
    let state = state.clone();
    spawn_local(async move {
        let vm = ResultsViewModel::new(state.api.clone(), state.session.clone());
        match vm.load().await {
            Ok(report) => {
                *state.report.borrow_mut() = Some(report);
                state.set_loading(false);
            }
            Err(e) => state.show_error("RESULTS", &e),
        }
    });
}

pub fn render_results(state: &AppState) -> Result<Element, JsValue> {
    let report = state.report.borrow().clone();
    let content = match report {
        Some(report) => Some(render_report(state, &report)?),
        None => None,
    };
    render_page_shell(state, "Results", content)
}

fn render_report(state: &AppState, report: &AttemptReport) -> Result<Element, JsValue> {
    let title = report.quiz_title.as_deref().unwrap_or("Quiz");

    let summary = ElementBuilder::new("dl")?
        .class("summary")
        .child(ElementBuilder::new("dt")?.text("Score").build())?
        .child(ElementBuilder::new("dd")?.id("score")?.text(&report.score.to_string()).build())?
        .child(ElementBuilder::new("dt")?.text("Time taken").build())?
        .child(ElementBuilder::new("dd")?.id("time-taken")?.text(&report.time_label()).build())?
        .build();

    let section = ElementBuilder::new("section")?
        .class("results")
        .child(ElementBuilder::new("h2")?.text(title).build())?
        .child(summary)?
        .build();

    if !report.answers.is_empty() {
        let heading = format!(
            "Your answers ({} of {} correct)",
            report.correct_count(),
            report.answers.len()
        );
        let list = ElementBuilder::new("ol")?.class("answer-review").build();
        for answer in &report.answers {
            let item = render_answer(answer)?;
            list.append_child(&item)?;
        }
        section.append_child(&ElementBuilder::new("h3")?.text(&heading).build())?;
        section.append_child(&list)?;
    }

    let back = if state.session.snapshot().is_teacher() {
        Page::Attempts
    } else {
        Page::Home
    };
    section.append_child(
        &ElementBuilder::new("a")?
            .class("btn-back")
            .attr("href", back.file_name())?
            .text("Back")
            .build(),
    )?;
    Ok(section)
}

fn render_answer(answer: &AnswerRecord) -> Result<Element, JsValue> {
    let item = ElementBuilder::new("li")?
        .class(if answer.is_pass() { "answer pass" } else { "answer fail" })
        .build();
    if let Some(text) = &answer.question_text {
        item.append_child(&ElementBuilder::new("p")?.class("answer-question").text(text).build())?;
    }
    item.append_child(
        &ElementBuilder::new("p")?
            .class("answer-user")
            .text(&format!("Your answer: {}", answer.user_answer))
            .build(),
    )?;
    if let (false, Some(correct)) = (answer.is_pass(), &answer.correct_answer) {
        item.append_child(
            &ElementBuilder::new("p")?
                .class("answer-correct")
                .text(&format!("Correct answer: {}", correct))
                .build(),
        )?;
    }
    Ok(item)
}
