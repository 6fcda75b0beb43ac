// ============================================================================
// HOME VIEW - homepage.html: tarjetas de quizzes
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::viewmodels::{visible_tiles, HomeViewModel, QuizTile};
use crate::views::shared::{follow, render_page_shell};

pub fn load_home(state: &AppState) {
    state.set_loading(true);
    let state = state.clone();
    spawn_local(async move {
        let vm = HomeViewModel::new(state.api.clone(), state.session.clone());
        match vm.load_quizzes().await {
            Ok(quizzes) => {
                *state.quizzes.borrow_mut() = quizzes;
                state.set_loading(false);
            }
            Err(e) => state.show_error("HOME", &e),
        }
    });
}

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let tiles = visible_tiles(&state.quizzes.borrow(), CONFIG.max_quiz_tiles);

    let grid = ElementBuilder::new("div")?.class("quiz-grid").build();
    if tiles.is_empty() && state.message.borrow().is_none() {
        grid.append_child(
            &ElementBuilder::new("p")?
                .class("empty")
                .text("No quizzes available yet.")
                .build(),
        )?;
    }
    for tile in &tiles {
        let card = render_tile(state, tile)?;
        grid.append_child(&card)?;
    }

    let content = ElementBuilder::new("section")?
        .class("home")
        .child(ElementBuilder::new("h2")?.text("Choose a quiz").build())?
        .child(grid)?
        .build();
    render_page_shell(state, "Quiz App", Some(content))
}

fn render_tile(state: &AppState, tile: &QuizTile) -> Result<Element, JsValue> {
    let image = ElementBuilder::new("img")?
        .attr("src", tile.image)?
        .attr("alt", tile.image_alt)?
        .build();

    let state = state.clone();
    let quiz_id = tile.quiz_id.clone();
    Ok(ElementBuilder::new("a")?
        .class("quiz-tile")
        .attr("href", &tile.href)?
        .data("quiz-id", &tile.quiz_id)?
        .child(image)?
        .child(ElementBuilder::new("h3")?.text(&tile.title).build())?
        .on_click(move |e: MouseEvent| {
            e.prevent_default();
            let vm = HomeViewModel::new(state.api.clone(), state.session.clone());
            follow(&state, "HOME", vm.select_quiz(&quiz_id));
        })?
        .build())
}
