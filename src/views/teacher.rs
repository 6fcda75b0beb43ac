// ============================================================================
// TEACHER VIEW - teacher.html: panel del profesor
// ============================================================================
// Los inputs escriben en los formularios del AppState sin re-renderizar
// (así no se pierde el foco); solo las acciones notifican.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{input_value, ElementBuilder};
use crate::models::{Quiz, User};
use crate::state::AppState;
use crate::viewmodels::{QuestionForm, QuizForm, TeacherViewModel};
use crate::views::shared::{follow, render_page_shell, report_error};

pub fn load_teacher(state: &AppState) {
    state.set_loading(true);
    let state = state.clone();
    spawn_local(async move {
        let vm = TeacherViewModel::new(state.api.clone(), state.session.clone());
        match vm.load().await {
            Ok(dashboard) => {
                *state.quizzes.borrow_mut() = dashboard.quizzes;
                *state.students.borrow_mut() = dashboard.students;
                state.set_loading(false);
            }
            Err(e) => report_error(&state, "TEACHER", &e),
        }
    });
}

pub fn render_teacher(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("teacher-dashboard")
        .child(render_quiz_list(state)?)?
        .child(render_quiz_form(state)?)?
        .child(render_question_form(state)?)?
        .child(render_students(state)?)?
        .build();
    render_page_shell(state, "Teacher Dashboard", Some(content))
}

// ----------------------------------------------------------------------------
// Quizzes
// ----------------------------------------------------------------------------

fn render_quiz_list(state: &AppState) -> Result<Element, JsValue> {
    let quizzes = state.quizzes.borrow().clone();
    let list = ElementBuilder::new("ul")?.class("quiz-list").build();
    for quiz in &quizzes {
        let row = render_quiz_row(state, quiz)?;
        list.append_child(&row)?;
    }
    if quizzes.is_empty() {
        list.append_child(&ElementBuilder::new("li")?.class("empty").text("No quizzes yet.").build())?;
    }

    Ok(ElementBuilder::new("section")?
        .class("panel")
        .child(ElementBuilder::new("h2")?.text("Quizzes").build())?
        .child(list)?
        .build())
}

fn render_quiz_row(state: &AppState, quiz: &Quiz) -> Result<Element, JsValue> {
    let edit = {
        let state = state.clone();
        let quiz = quiz.clone();
        small_button("Edit", move || {
            *state.quiz_form.borrow_mut() = QuizForm::editing(&quiz);
            state.clear_message();
            state.notify_subscribers();
        })?
    };
    let add_question = {
        let state = state.clone();
        let quiz_id = quiz.quiz_id.clone();
        small_button("Add question", move || {
            *state.question_form.borrow_mut() = QuestionForm {
                quiz_id: Some(quiz_id.clone()),
                ..QuestionForm::default()
            };
            state.clear_message();
            state.notify_subscribers();
        })?
    };
    let hide = {
        let state = state.clone();
        let quiz_id = quiz.quiz_id.clone();
        small_button("Hide", move || hide_quiz(&state, quiz_id.clone()))?
    };

    Ok(ElementBuilder::new("li")?
        .class("quiz-row")
        .data("quiz-id", &quiz.quiz_id)?
        .child(ElementBuilder::new("span")?.class("quiz-title").text(&quiz.title).build())?
        .child(edit)?
        .child(add_question)?
        .child(hide)?
        .build())
}

fn hide_quiz(state: &AppState, quiz_id: String) {
    let state = state.clone();
    spawn_local(async move {
        let vm = TeacherViewModel::new(state.api.clone(), state.session.clone());
        match vm.hide_quiz(&quiz_id).await {
            Ok(()) => {
                state.quizzes.borrow_mut().retain(|q| q.quiz_id != quiz_id);
                state.set_notice("Quiz hidden.");
            }
            Err(e) => report_error(&state, "TEACHER", &e),
        }
    });
}

fn render_quiz_form(state: &AppState) -> Result<Element, JsValue> {
    let form = state.quiz_form.borrow().clone();
    let heading = if form.editing_quiz_id.is_some() {
        "Edit quiz"
    } else {
        "New quiz"
    };

    let title = text_field("quiz-title", "Title", &form.title, state.quiz_form.clone(), |f, v| {
        f.title = v
    })?;
    let description = text_area(
        "quiz-description",
        "Description",
        &form.description,
        state.quiz_form.clone(),
        |f, v| f.description = v,
    )?;

    let save = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-primary")
            .attr("type", "button")?
            .text("Save quiz")
            .on_click(move |_| save_quiz(&state))?
            .build()
    };

    let section = ElementBuilder::new("section")?
        .class("panel quiz-form")
        .child(ElementBuilder::new("h2")?.text(heading).build())?
        .child(title)?
        .child(description)?
        .child(save)?
        .build();

    if form.editing_quiz_id.is_some() {
        let state = state.clone();
        let cancel = small_button("Cancel", move || {
            *state.quiz_form.borrow_mut() = QuizForm::default();
            state.notify_subscribers();
        })?;
        section.append_child(&cancel)?;
    }
    Ok(section)
}

fn save_quiz(state: &AppState) {
    let form = state.quiz_form.borrow().clone();
    let state = state.clone();
    spawn_local(async move {
        let vm = TeacherViewModel::new(state.api.clone(), state.session.clone());
        match vm.save_quiz(&form).await {
            Ok(saved) => {
                {
                    let mut quizzes = state.quizzes.borrow_mut();
                    match quizzes.iter_mut().find(|q| q.quiz_id == saved.quiz_id) {
                        Some(existing) => *existing = saved,
                        None => quizzes.push(saved),
                    }
                }
                *state.quiz_form.borrow_mut() = QuizForm::default();
                state.set_notice("Quiz saved.");
            }
            Err(e) => report_error(&state, "TEACHER", &e),
        }
    });
}

// ----------------------------------------------------------------------------
// Preguntas
// ----------------------------------------------------------------------------

fn render_question_form(state: &AppState) -> Result<Element, JsValue> {
    let form = state.question_form.borrow().clone();
    let target = form.quiz_id.as_ref().and_then(|id| {
        state
            .quizzes
            .borrow()
            .iter()
            .find(|q| &q.quiz_id == id)
            .map(|q| q.title.clone())
    });

    let section = ElementBuilder::new("section")?
        .class("panel question-form")
        .child(ElementBuilder::new("h2")?.text("Add a question").build())?
        .build();

    let Some(target) = target else {
        section.append_child(
            &ElementBuilder::new("p")?
                .class("hint")
                .text("Pick \"Add question\" on a quiz first.")
                .build(),
        )?;
        return Ok(section);
    };

    section.append_child(&ElementBuilder::new("p")?.class("target").text(&format!("Quiz: {}", target)).build())?;
    let question_text = text_field(
        "question-text",
        "Question",
        &form.question_text,
        state.question_form.clone(),
        |f, v| f.question_text = v,
    )?;
    section.append_child(&question_text)?;
    for (index, option) in form.options.iter().enumerate() {
        let field = text_field(
            &format!("option-{}", index + 1),
            &format!("Option {}", index + 1),
            option,
            state.question_form.clone(),
            move |f, v| f.options[index] = v,
        )?;
        section.append_child(&field)?;
    }
    let correct_answer = text_field(
        "correct-answer",
        "Correct answer",
        &form.correct_answer,
        state.question_form.clone(),
        |f, v| f.correct_answer = v,
    )?;
    section.append_child(&correct_answer)?;

    let state_clone = state.clone();
    section.append_child(
        &ElementBuilder::new("button")?
            .class("btn-primary")
            .attr("type", "button")?
            .text("Add question")
            .on_click(move |_| add_question(&state_clone))?
            .build(),
    )?;
    Ok(section)
}

fn add_question(state: &AppState) {
    let form = state.question_form.borrow().clone();
    let state = state.clone();
    spawn_local(async move {
        let vm = TeacherViewModel::new(state.api.clone(), state.session.clone());
        match vm.add_question(&form).await {
            Ok(_) => {
                // Se queda en el mismo quiz para añadir otra
                *state.question_form.borrow_mut() = QuestionForm {
                    quiz_id: form.quiz_id.clone(),
                    ..QuestionForm::default()
                };
                state.set_notice("Question added.");
            }
            Err(e) => report_error(&state, "TEACHER", &e),
        }
    });
}

// ----------------------------------------------------------------------------
// Alumnos
// ----------------------------------------------------------------------------

fn render_students(state: &AppState) -> Result<Element, JsValue> {
    let students = state.students.borrow().clone();
    let list = ElementBuilder::new("ul")?.class("student-list").build();
    for student in &students {
        let row = render_student(state, student)?;
        list.append_child(&row)?;
    }
    if students.is_empty() {
        list.append_child(&ElementBuilder::new("li")?.class("empty").text("No students yet.").build())?;
    }
    Ok(ElementBuilder::new("section")?
        .class("panel")
        .child(ElementBuilder::new("h2")?.text("Students").build())?
        .child(list)?
        .build())
}

fn render_student(state: &AppState, student: &User) -> Result<Element, JsValue> {
    let state = state.clone();
    let student_id = student.user_id.clone();
    let view = small_button("View attempts", move || {
        let vm = TeacherViewModel::new(state.api.clone(), state.session.clone());
        follow(&state, "TEACHER", vm.view_student(&student_id));
    })?;
    Ok(ElementBuilder::new("li")?
        .class("student-row")
        .child(ElementBuilder::new("span")?.text(student.display_name()).build())?
        .child(view)?
        .build())
}

// ----------------------------------------------------------------------------
// Helpers de formulario
// ----------------------------------------------------------------------------

fn small_button<F>(label: &str, mut handler: F) -> Result<Element, JsValue>
where
    F: FnMut() + 'static,
{
    Ok(ElementBuilder::new("button")?
        .class("btn-small")
        .attr("type", "button")?
        .text(label)
        .on_click(move |_| handler())?
        .build())
}

fn text_field<T, F>(
    id: &str,
    label: &str,
    value: &str,
    form: Rc<RefCell<T>>,
    write: F,
) -> Result<Element, JsValue>
where
    T: 'static,
    F: Fn(&mut T, String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", "text")?
        .attr("value", value)?
        .on_input(move |e| {
            if let Some(v) = input_value(&e) {
                write(&mut form.borrow_mut(), v);
            }
        })?
        .build();
    labelled(id, label, input)
}

fn text_area<T, F>(
    id: &str,
    label: &str,
    value: &str,
    form: Rc<RefCell<T>>,
    write: F,
) -> Result<Element, JsValue>
where
    T: 'static,
    F: Fn(&mut T, String) + 'static,
{
    let area = ElementBuilder::new("textarea")?
        .id(id)?
        .text(value)
        .on_input(move |e| {
            if let Some(v) = input_value(&e) {
                write(&mut form.borrow_mut(), v);
            }
        })?
        .build();
    labelled(id, label, area)
}

fn labelled(id: &str, label: &str, field: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-field")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(field)?
        .build())
}
