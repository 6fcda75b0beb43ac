// ============================================================================
// ATTEMPTS VIEW - attempts.html: historial de intentos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::utils::Page;
use crate::viewmodels::{AttemptRow, AttemptsViewModel};
use crate::views::shared::{follow, render_page_shell};

pub fn load_attempts(state: &AppState) {
    state.set_loading(true);
    let state = state.clone();
    spawn_local(async move {
        let vm = AttemptsViewModel::new(state.api.clone(), state.session.clone());
        match vm.load().await {
            Ok(rows) => {
                *state.attempts.borrow_mut() = rows;
                state.set_loading(false);
            }
            Err(e) => state.show_error("ATTEMPTS", &e),
        }
    });
}

pub fn render_attempts(state: &AppState) -> Result<Element, JsValue> {
    let rows = state.attempts.borrow().clone();
    let content = ElementBuilder::new("section")?.class("attempts").build();

    if rows.is_empty() {
        content.append_child(
            &ElementBuilder::new("p")?
                .class("empty")
                .text("No attempts yet.")
                .build(),
        )?;
    } else {
        let list = ElementBuilder::new("ul")?.class("attempt-list").build();
        for row in &rows {
            let item = render_row(state, row)?;
            list.append_child(&item)?;
        }
        content.append_child(&list)?;
    }

    let title = if state.session.snapshot().is_teacher() {
        "Student Attempts"
    } else {
        "My Attempts"
    };
    render_page_shell(state, title, Some(content))
}

fn render_row(state: &AppState, row: &AttemptRow) -> Result<Element, JsValue> {
    let attempt = row.attempt.clone();
    let mut details = format!("Score: {}", attempt.score);
    if let Some(time) = attempt.time_taken {
        details.push_str(&format!(" · {}", time));
    }
    if let Some(started) = attempt.started_label() {
        details.push_str(&format!(" · {}", started));
    }

    let state = state.clone();
    let link = ElementBuilder::new("a")?
        .class("attempt-link")
        .attr("href", Page::Results.file_name())?
        .data("attempt-id", &attempt.user_attempt_id)?
        .child(ElementBuilder::new("strong")?.text(&row.quiz_title).build())?
        .child(ElementBuilder::new("span")?.class("attempt-details").text(&details).build())?
        .on_click(move |e: MouseEvent| {
            e.prevent_default();
            let vm = AttemptsViewModel::new(state.api.clone(), state.session.clone());
            follow(&state, "ATTEMPTS", vm.open(&attempt));
        })?
        .build();

    Ok(ElementBuilder::new("li")?.child(link)?.build())
}
