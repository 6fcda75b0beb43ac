// ============================================================================
// RESULTS VIEWMODEL - Puntuación, tiempo y repaso de respuestas
// ============================================================================

use std::rc::Rc;

use crate::error::ClientResult;
use crate::models::{AnswerRecord, AttemptKey, TimeTaken};
use crate::services::QuizApi;
use crate::state::SessionState;

/// Todo lo que muestra la página de resultados
#[derive(Clone, Debug, PartialEq)]
pub struct AttemptReport {
    pub quiz_id: String,
    pub quiz_title: Option<String>,
    pub score: i64,
    pub time_taken: Option<TimeTaken>,
    pub answers: Vec<AnswerRecord>,
}

impl AttemptReport {
    pub fn time_label(&self) -> String {
        self.time_taken
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_pass()).count()
    }
}

pub struct ResultsViewModel<A: QuizApi> {
    api: Rc<A>,
    session: SessionState,
}

impl<A: QuizApi> ResultsViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    /// Resuelve (usuario, quiz, intento). Si falta `selectedQuizId` se pide
    /// a `GET /attempts/details/{attemptId}` y se guarda en sesión.
    async fn resolve_key(&self) -> ClientResult<AttemptKey> {
        let ctx = self.session.snapshot();
        let attempt_id = ctx.require_attempt_id()?.to_string();

        // Un profesor revisando a un alumno usa el id del alumno
        let owner = if ctx.is_teacher() {
            ctx.viewed_student_id.clone().or(ctx.user_id.clone())
        } else {
            ctx.user_id.clone()
        };

        match (ctx.selected_quiz_id.clone(), owner) {
            (Some(quiz_id), Some(user_id)) => Ok(AttemptKey {
                user_id,
                quiz_id,
                attempt_id,
            }),
            _ => {
                let details = self.api.get_attempt_details(&attempt_id).await?;
                self.session.select_quiz(&details.quiz_id)?;
                log::info!(
                    "🔎 [RESULTS] Intento {} pertenece al quiz {}",
                    attempt_id,
                    details.quiz_id
                );
                Ok(AttemptKey {
                    user_id: details.user_id,
                    quiz_id: details.quiz_id,
                    attempt_id,
                })
            }
        }
    }

    pub async fn load(&self) -> ClientResult<AttemptReport> {
        let key = self.resolve_key().await?;
        let result = self.api.get_attempt_result(&key).await?;

        // El repaso es secundario: sin él se muestra igual la puntuación
        let answers = match self.api.list_answers(&key).await {
            Ok(answers) => answers,
            Err(e) => {
                log::warn!("⚠️ [RESULTS] Respuestas no disponibles: {}", e);
                Vec::new()
            }
        };

        let quiz_title = self.session.cached_quizzes().and_then(|quizzes| {
            quizzes
                .into_iter()
                .find(|q| q.quiz_id == key.quiz_id)
                .map(|q| q.title)
        });

        log::info!("✅ [RESULTS] Intento {}: {} puntos", key.attempt_id, result.score);
        Ok(AttemptReport {
            quiz_id: key.quiz_id,
            quiz_title,
            score: result.score,
            time_taken: result.time_taken,
            answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, DATA_NOT_AVAILABLE};
    use crate::models::{Role, SubmitAnswerRequest, User};
    use crate::services::fake_api::{FakeApi, POINTS_PER_ANSWER};
    use crate::utils::SessionStore;

    fn user(id: &str, role: Role) -> User {
        User {
            user_id: id.into(),
            role,
            user_name: None,
            full_name: None,
            email: None,
        }
    }

    async fn answered_attempt(api: &FakeApi) -> String {
        let attempt_id = api.create_attempt("q1", "u1").await.unwrap();
        api.submit_answer(&SubmitAnswerRequest {
            user_id: "u1".into(),
            quiz_id: "q1".into(),
            attempt_id: attempt_id.clone(),
            question_id: "x1".into(),
            user_answer: "b".into(),
        })
        .await
        .unwrap();
        attempt_id
    }

    fn backend() -> Rc<FakeApi> {
        Rc::new(FakeApi::new().with_quiz(
            "q1",
            "Java",
            vec![FakeApi::question("x1", "Q?", ["a", "b", "c", "d"], "b")],
        ))
    }

    #[tokio::test]
    async fn report_shows_server_score_and_answers() {
        let api = backend();
        let attempt_id = answered_attempt(&api).await;
        let session = SessionState::new(SessionStore::in_memory());
        session.login(&user("u1", Role::Student)).unwrap();
        session.open_attempt("q1", &attempt_id).unwrap();

        let report = ResultsViewModel::new(api, session).load().await.unwrap();
        assert_eq!(report.score, POINTS_PER_ANSWER);
        assert_eq!(report.time_label(), "1m 05s");
        assert_eq!(report.correct_count(), 1);
    }

    #[tokio::test]
    async fn missing_quiz_id_is_resolved_from_attempt_details() {
        let api = backend();
        let attempt_id = answered_attempt(&api).await;
        let session = SessionState::new(SessionStore::in_memory());
        session.login(&user("u1", Role::Student)).unwrap();
        session.start_attempt(&attempt_id).unwrap();

        let report = ResultsViewModel::new(api.clone(), session.clone())
            .load()
            .await
            .unwrap();
        assert_eq!(report.quiz_id, "q1");
        assert_eq!(api.called("get_attempt_details"), 1);
        assert_eq!(session.snapshot().selected_quiz_id.as_deref(), Some("q1"));
    }

    #[tokio::test]
    async fn teacher_sees_the_student_attempt() {
        let api = backend();
        let attempt_id = answered_attempt(&api).await;
        let session = SessionState::new(SessionStore::in_memory());
        session.login(&user("t1", Role::Teacher)).unwrap();
        session.view_student(Some("u1")).unwrap();
        session.open_attempt("q1", &attempt_id).unwrap();

        let report = ResultsViewModel::new(api, session).load().await.unwrap();
        assert_eq!(report.answers.len(), 1);
    }

    #[tokio::test]
    async fn no_attempt_in_session_shows_fallback() {
        let session = SessionState::new(SessionStore::in_memory());
        let err = ResultsViewModel::new(backend(), session)
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingSession(_)));
        assert_eq!(err.user_message(), DATA_NOT_AVAILABLE);
    }
}
