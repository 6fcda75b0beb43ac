// ============================================================================
// TEACHER VIEWMODEL - Panel del profesor
// ============================================================================
// Quizzes (crear, editar, ocultar), preguntas nuevas y lista de alumnos.
// Los formularios se validan aquí antes de tocar la red.
// ============================================================================

use std::rc::Rc;

use crate::error::{ClientError, ClientResult};
use crate::models::question::OPTIONS_PER_QUESTION;
use crate::models::{NewQuestion, Quiz, QuizInput, User};
use crate::services::QuizApi;
use crate::state::SessionState;
use crate::utils::Page;

/// Formulario de quiz; con `editing_quiz_id` se actualiza en vez de crear
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizForm {
    pub editing_quiz_id: Option<String>,
    pub title: String,
    pub description: String,
}

impl QuizForm {
    pub fn editing(quiz: &Quiz) -> Self {
        Self {
            editing_quiz_id: Some(quiz.quiz_id.clone()),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
        }
    }

    pub fn to_input(&self) -> QuizInput {
        QuizInput::new(self.title.trim(), self.description.trim())
    }
}

/// Formulario de pregunta nueva
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionForm {
    pub quiz_id: Option<String>,
    pub question_text: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_answer: String,
}

impl QuestionForm {
    pub fn to_new_question(&self) -> NewQuestion {
        NewQuestion {
            question_text: self.question_text.trim().to_string(),
            options: self.options.iter().map(|o| o.trim().to_string()).collect(),
            correct_answer: self.correct_answer.trim().to_string(),
        }
    }
}

/// Datos iniciales del panel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub quizzes: Vec<Quiz>,
    pub students: Vec<User>,
}

pub struct TeacherViewModel<A: QuizApi> {
    api: Rc<A>,
    session: SessionState,
}

impl<A: QuizApi> TeacherViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    fn require_teacher(&self) -> ClientResult<()> {
        let ctx = self.session.snapshot();
        ctx.require_user_id()?;
        if !ctx.is_teacher() {
            return Err(ClientError::validation(
                "Only teachers can use the dashboard.",
            ));
        }
        Ok(())
    }

    pub async fn load(&self) -> ClientResult<Dashboard> {
        self.require_teacher()?;
        let quizzes = self.api.list_quizzes().await?;
        if let Err(e) = self.session.cache_quizzes(&quizzes) {
            log::warn!("⚠️ [TEACHER] No se pudo cachear la lista: {}", e);
        }
        let students = match self.api.list_students().await {
            Ok(students) => students,
            Err(e) => {
                log::warn!("⚠️ [TEACHER] Lista de alumnos no disponible: {}", e);
                Vec::new()
            }
        };
        log::info!(
            "✅ [TEACHER] Panel: {} quizzes, {} alumnos",
            quizzes.len(),
            students.len()
        );
        Ok(Dashboard { quizzes, students })
    }

    /// Borrado lógico: el quiz deja de aparecer en `GET /quiz`
    pub async fn hide_quiz(&self, quiz_id: &str) -> ClientResult<()> {
        self.require_teacher()?;
        self.api.set_quiz_visibility(quiz_id, false).await?;
        log::info!("🙈 [TEACHER] Quiz {} oculto", quiz_id);
        Ok(())
    }

    pub async fn save_quiz(&self, form: &QuizForm) -> ClientResult<Quiz> {
        self.require_teacher()?;
        let input = form.to_input();
        input.validate()?;
        let quiz = match &form.editing_quiz_id {
            Some(quiz_id) => self.api.update_quiz(quiz_id, &input).await?,
            None => self.api.create_quiz(&input).await?,
        };
        log::info!("💾 [TEACHER] Quiz {} guardado", quiz.quiz_id);
        Ok(quiz)
    }

    pub async fn add_question(&self, form: &QuestionForm) -> ClientResult<String> {
        self.require_teacher()?;
        let quiz_id = form
            .quiz_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::validation("Please choose a quiz."))?;
        let question = form.to_new_question();
        question.validate()?;
        let question_id = self.api.create_question(quiz_id, &question).await?;
        log::info!("➕ [TEACHER] Pregunta {} añadida a {}", question_id, quiz_id);
        Ok(question_id)
    }

    /// Abre el historial de un alumno
    pub fn view_student(&self, student_id: &str) -> ClientResult<Page> {
        self.require_teacher()?;
        self.session.view_student(Some(student_id))?;
        Ok(Page::Attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::fake_api::FakeApi;
    use crate::utils::SessionStore;

    fn setup(role: Role) -> (Rc<FakeApi>, SessionState, TeacherViewModel<FakeApi>) {
        let api = Rc::new(
            FakeApi::new()
                .with_quiz("q1", "A", Vec::new())
                .with_user("u1", "ada", Role::Student)
                .with_user("t1", "grace", Role::Teacher),
        );
        let session = SessionState::new(SessionStore::in_memory());
        session
            .login(&User {
                user_id: "t1".into(),
                role,
                user_name: None,
                full_name: None,
                email: None,
            })
            .unwrap();
        let vm = TeacherViewModel::new(api.clone(), session.clone());
        (api, session, vm)
    }

    fn question_form(correct: &str) -> QuestionForm {
        QuestionForm {
            quiz_id: Some("q1".into()),
            question_text: "Which keyword defines a function?".into(),
            options: ["func".into(), "def".into(), "fn".into(), "lambda".into()],
            correct_answer: correct.into(),
        }
    }

    #[tokio::test]
    async fn dashboard_lists_quizzes_and_students() {
        let (_, _, vm) = setup(Role::Teacher);
        let dashboard = vm.load().await.unwrap();
        assert_eq!(dashboard.quizzes.len(), 1);
        assert_eq!(dashboard.students.len(), 1);
    }

    #[tokio::test]
    async fn students_cannot_open_dashboard() {
        let (api, _, vm) = setup(Role::Student);
        assert!(matches!(vm.load().await, Err(ClientError::Validation(_))));
        assert_eq!(api.called("list_quizzes"), 0);
    }

    #[tokio::test]
    async fn hidden_quiz_leaves_listing() {
        let (api, _, vm) = setup(Role::Teacher);
        vm.hide_quiz("q1").await.unwrap();
        assert!(api.is_hidden("q1"));
        assert!(vm.load().await.unwrap().quizzes.is_empty());
    }

    #[tokio::test]
    async fn quiz_form_creates_then_updates() {
        let (_, _, vm) = setup(Role::Teacher);
        let created = vm
            .save_quiz(&QuizForm {
                editing_quiz_id: None,
                title: " Rust ".into(),
                description: "Ownership".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.title, "Rust");

        let mut form = QuizForm::editing(&created);
        form.title = "Rust 101".into();
        let updated = vm.save_quiz(&form).await.unwrap();
        assert_eq!(updated.quiz_id, created.quiz_id);
        assert_eq!(updated.title, "Rust 101");
    }

    #[tokio::test]
    async fn blank_title_never_reaches_server() {
        let (api, _, vm) = setup(Role::Teacher);
        assert!(vm.save_quiz(&QuizForm::default()).await.is_err());
        assert_eq!(api.called("create_quiz"), 0);
    }

    #[tokio::test]
    async fn question_is_validated_before_sending() {
        let (api, _, vm) = setup(Role::Teacher);
        assert!(matches!(
            vm.add_question(&question_form("define")).await,
            Err(ClientError::Validation(_))
        ));
        let mut missing_option = question_form("def");
        missing_option.options[3] = "  ".into();
        assert!(vm.add_question(&missing_option).await.is_err());
        assert_eq!(api.called("create_question"), 0);

        let id = vm.add_question(&question_form("def")).await.unwrap();
        assert_eq!(id, "q1-x1");
    }

    #[tokio::test]
    async fn question_needs_a_target_quiz() {
        let (_, _, vm) = setup(Role::Teacher);
        let mut form = question_form("def");
        form.quiz_id = None;
        let err = vm.add_question(&form).await.unwrap_err();
        assert_eq!(err.user_message(), "Please choose a quiz.");
    }

    #[test]
    fn viewing_student_opens_history() {
        let (_, session, vm) = setup(Role::Teacher);
        assert_eq!(vm.view_student("u1").unwrap(), Page::Attempts);
        assert_eq!(session.snapshot().viewed_student_id.as_deref(), Some("u1"));
    }
}
