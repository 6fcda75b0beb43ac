// ============================================================================
// ATTEMPTS VIEWMODEL - Historial de intentos de un usuario
// ============================================================================

use std::rc::Rc;

use crate::error::ClientResult;
use crate::models::{Attempt, Quiz};
use crate::services::QuizApi;
use crate::state::SessionState;
use crate::utils::Page;

/// Fila del historial con el título del quiz si se conoce
#[derive(Clone, Debug, PartialEq)]
pub struct AttemptRow {
    pub attempt: Attempt,
    pub quiz_title: String,
}

pub fn attempt_rows(attempts: Vec<Attempt>, quizzes: &[Quiz]) -> Vec<AttemptRow> {
    attempts
        .into_iter()
        .map(|attempt| {
            let quiz_title = quizzes
                .iter()
                .find(|q| q.quiz_id == attempt.quiz_id)
                .map(|q| q.title.clone())
                .unwrap_or_else(|| attempt.quiz_id.clone());
            AttemptRow {
                attempt,
                quiz_title,
            }
        })
        .collect()
}

pub struct AttemptsViewModel<A: QuizApi> {
    api: Rc<A>,
    session: SessionState,
}

impl<A: QuizApi> AttemptsViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    /// Intentos del usuario en sesión, o del alumno que revisa el profesor
    pub async fn load(&self) -> ClientResult<Vec<AttemptRow>> {
        let ctx = self.session.snapshot();
        let user_id = match (&ctx.viewed_student_id, ctx.is_teacher()) {
            (Some(student_id), true) => student_id.clone(),
            _ => ctx.require_user_id()?.to_string(),
        };

        let attempts = self.api.list_attempts(&user_id).await?;
        log::info!("📋 [ATTEMPTS] {} intentos de {}", attempts.len(), user_id);

        let quizzes = match self.session.cached_quizzes() {
            Some(quizzes) => quizzes,
            None => match self.api.list_quizzes().await {
                Ok(quizzes) => quizzes,
                Err(e) => {
                    log::warn!("⚠️ [ATTEMPTS] Títulos no disponibles: {}", e);
                    Vec::new()
                }
            },
        };
        Ok(attempt_rows(attempts, &quizzes))
    }

    /// Click en un intento: lo deja en sesión y abre sus resultados
    pub fn open(&self, attempt: &Attempt) -> ClientResult<Page> {
        self.session
            .open_attempt(&attempt.quiz_id, &attempt.user_attempt_id)?;
        Ok(Page::Results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::models::{Role, User};
    use crate::services::fake_api::FakeApi;
    use crate::utils::SessionStore;

    fn login(session: &SessionState, id: &str, role: Role) {
        session
            .login(&User {
                user_id: id.into(),
                role,
                user_name: None,
                full_name: None,
                email: None,
            })
            .unwrap();
    }

    #[tokio::test]
    async fn lists_own_attempts_with_titles() {
        let api = Rc::new(FakeApi::new().with_quiz("q1", "Python Basics", Vec::new()));
        api.create_attempt("q1", "u1").await.unwrap();
        api.create_attempt("q1", "u2").await.unwrap();
        let session = SessionState::new(SessionStore::in_memory());
        login(&session, "u1", Role::Student);

        let rows = AttemptsViewModel::new(api, session).load().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quiz_title, "Python Basics");
    }

    #[tokio::test]
    async fn teacher_lists_viewed_student() {
        let api = Rc::new(FakeApi::new().with_quiz("q1", "A", Vec::new()));
        api.create_attempt("q1", "u2").await.unwrap();
        let session = SessionState::new(SessionStore::in_memory());
        login(&session, "t1", Role::Teacher);
        session.view_student(Some("u2")).unwrap();

        let rows = AttemptsViewModel::new(api, session).load().await.unwrap();
        assert_eq!(rows[0].attempt.user_id, "u2");
    }

    #[tokio::test]
    async fn opening_attempt_targets_results() {
        let api = Rc::new(FakeApi::new().with_quiz("q1", "A", Vec::new()));
        api.create_attempt("q1", "u1").await.unwrap();
        let session = SessionState::new(SessionStore::in_memory());
        login(&session, "u1", Role::Student);
        let vm = AttemptsViewModel::new(api, session.clone());

        let rows = vm.load().await.unwrap();
        assert_eq!(vm.open(&rows[0].attempt).unwrap(), Page::Results);
        let ctx = session.snapshot();
        assert_eq!(ctx.selected_quiz_id.as_deref(), Some("q1"));
        assert_eq!(ctx.user_attempt_id.as_deref(), Some("a1"));
    }

    #[tokio::test]
    async fn anonymous_visit_needs_login() {
        let vm = AttemptsViewModel::new(
            Rc::new(FakeApi::new()),
            SessionState::new(SessionStore::in_memory()),
        );
        assert!(matches!(vm.load().await, Err(ClientError::MissingSession(_))));
    }

    #[test]
    fn unknown_quiz_falls_back_to_id() {
        let attempt = Attempt {
            user_attempt_id: "a1".into(),
            quiz_id: "q9".into(),
            user_id: "u1".into(),
            score: 0,
            time_taken: None,
            date_started: None,
        };
        assert_eq!(attempt_rows(vec![attempt], &[])[0].quiz_title, "q9");
    }
}
