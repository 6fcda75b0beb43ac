// ============================================================================
// LOGIN VIEW - index.html
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{input_value, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::LoginViewModel;
use crate::views::shared::{follow, render_messages};

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let loading = state.is_loading();

    let username_input = {
        let username = state.username_input.clone();
        ElementBuilder::new("input")?
            .id("username")?
            .attr("type", "text")?
            .attr("placeholder", "Username")?
            .attr("autocomplete", "username")?
            .attr("value", &state.username_input.borrow())?
            .disabled(loading)?
            .on_input(move |e| {
                if let Some(value) = input_value(&e) {
                    *username.borrow_mut() = value;
                }
            })?
            .build()
    };

    let submit = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-login")
            .attr("type", "button")?
            .text(if loading { "Signing in..." } else { "Sign in" })
            .disabled(loading)?
            .on_click(move |_| submit_login(&state))?
            .build()
    };

    let form = ElementBuilder::new("div")?
        .class("login-form")
        .child(ElementBuilder::new("label")?.attr("for", "username")?.text("Username").build())?
        .child(username_input)?
        .child(submit)?
        .build();

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(ElementBuilder::new("h1")?.text("Quiz App").build())?
        .child(ElementBuilder::new("p")?.class("subtitle").text("Sign in to start a quiz").build())?
        .build();
    if let Some(messages) = render_messages(state)? {
        container.append_child(&messages)?;
    }
    container.append_child(&form)?;

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(container)?
        .build())
}

fn submit_login(state: &AppState) {
    if state.is_loading() {
        return;
    }
    let username = state.username_input.borrow().clone();
    state.clear_message();
    state.set_loading(true);

    let state = state.clone();
    spawn_local(async move {
        let vm = LoginViewModel::new(state.api.clone(), state.session.clone());
        let result = vm.login(&username).await.map(|(_, page)| page);
        if result.is_ok() {
            *state.loading.borrow_mut() = false;
        }
        follow(&state, "LOGIN", result);
    });
}
