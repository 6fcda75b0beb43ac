// ============================================================================
// DESCRIPTION VIEWMODEL - Descripción del quiz y botón "Start Quiz"
// ============================================================================

use std::rc::Rc;

use crate::error::{ClientError, ClientResult};
use crate::models::Quiz;
use crate::services::QuizApi;
use crate::state::SessionState;
use crate::utils::Page;

/// Busca el quiz en la lista cacheada por la portada
pub fn find_cached<'a>(quizzes: &'a [Quiz], quiz_id: &str) -> Option<&'a Quiz> {
    quizzes.iter().find(|quiz| quiz.quiz_id == quiz_id)
}

pub struct DescriptionViewModel<A: QuizApi> {
    api: Rc<A>,
    session: SessionState,
}

impl<A: QuizApi> DescriptionViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    /// Quiz seleccionado: primero la caché, luego `GET /quiz/{id}`.
    /// Sin `selectedQuizId` se usa el id del enlace (`?quizId=`), y sin
    /// ninguno de los dos → `MissingSession`; id desconocido → HTTP 404.
    pub async fn load(&self, linked_quiz_id: Option<&str>) -> ClientResult<Quiz> {
        let selected = self.session.snapshot().selected_quiz_id;
        let quiz_id = match (selected, linked_quiz_id) {
            (Some(quiz_id), _) => quiz_id,
            (None, Some(linked)) => {
                log::info!("🔗 [DESCRIPTION] Quiz {} tomado del enlace", linked);
                self.session.select_quiz(linked)?;
                linked.to_string()
            }
            (None, None) => self.session.snapshot().require_quiz_id()?.to_string(),
        };

        if let Some(cached) = self.session.cached_quizzes() {
            if let Some(quiz) = find_cached(&cached, &quiz_id) {
                log::info!("💾 [DESCRIPTION] Quiz {} servido desde caché", quiz_id);
                return Ok(quiz.clone());
            }
        }

        let detail = self.api.get_quiz(&quiz_id).await?;
        Ok(detail.quiz)
    }

    /// Crea el intento y devuelve la página de preguntas
    pub async fn start_quiz(&self) -> ClientResult<Page> {
        let (user_id, quiz_id) = {
            let ctx = self.session.snapshot();
            (
                ctx.require_user_id()?.to_string(),
                ctx.require_quiz_id()?.to_string(),
            )
        };

        let attempt_id = self.api.create_attempt(&quiz_id, &user_id).await?;
        if attempt_id.is_empty() {
            return Err(ClientError::Parse("empty userAttemptId".into()));
        }
        self.session.start_attempt(&attempt_id)?;
        log::info!("🚀 [DESCRIPTION] Intento {} iniciado", attempt_id);
        Ok(Page::Question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DATA_NOT_AVAILABLE, QUIZ_NOT_FOUND};
    use crate::models::{Role, User};
    use crate::services::fake_api::FakeApi;
    use crate::utils::SessionStore;

    fn setup(api: FakeApi) -> (Rc<FakeApi>, SessionState, DescriptionViewModel<FakeApi>) {
        let api = Rc::new(api);
        let session = SessionState::new(SessionStore::in_memory());
        let vm = DescriptionViewModel::new(api.clone(), session.clone());
        (api, session, vm)
    }

    #[tokio::test]
    async fn missing_selection_shows_data_not_available() {
        let (_, _, vm) = setup(FakeApi::new());
        let err = vm.load(None).await.unwrap_err();
        assert_eq!(err.user_message(), DATA_NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn cached_quiz_skips_the_network() {
        let (api, session, vm) = setup(FakeApi::new());
        session
            .cache_quizzes(&[Quiz {
                quiz_id: "q1".into(),
                title: "A".into(),
                description: "About A".into(),
            }])
            .unwrap();
        session.select_quiz("q1").unwrap();

        assert_eq!(vm.load(None).await.unwrap().description, "About A");
        assert_eq!(api.called("get_quiz"), 0);
    }

    #[tokio::test]
    async fn falls_back_to_backend_lookup() {
        let (api, session, vm) = setup(FakeApi::new().with_quiz("q7", "Seven", Vec::new()));
        session.select_quiz("q7").unwrap();
        assert_eq!(vm.load(None).await.unwrap().title, "Seven");
        assert_eq!(api.called("get_quiz"), 1);
    }

    #[tokio::test]
    async fn link_id_used_when_session_has_none() {
        let (_, session, vm) = setup(FakeApi::new().with_quiz("q7", "Seven", Vec::new()));
        assert_eq!(vm.load(Some("q7")).await.unwrap().title, "Seven");
        assert_eq!(session.snapshot().selected_quiz_id.as_deref(), Some("q7"));
    }

    #[tokio::test]
    async fn session_selection_wins_over_link() {
        let (_, session, vm) = setup(
            FakeApi::new()
                .with_quiz("q1", "One", Vec::new())
                .with_quiz("q7", "Seven", Vec::new()),
        );
        session.select_quiz("q1").unwrap();
        assert_eq!(vm.load(Some("q7")).await.unwrap().title, "One");
    }

    #[tokio::test]
    async fn unknown_id_shows_quiz_not_found() {
        let (_, session, vm) = setup(FakeApi::new());
        session.select_quiz("nope").unwrap();
        let err = vm.load(None).await.unwrap_err();
        assert_eq!(err.user_message(), QUIZ_NOT_FOUND);
    }

    #[tokio::test]
    async fn start_quiz_stores_attempt_id() {
        let (_, session, vm) = setup(FakeApi::new().with_quiz("q1", "A", Vec::new()));
        session
            .login(&User {
                user_id: "u1".into(),
                role: Role::Student,
                user_name: None,
                full_name: None,
                email: None,
            })
            .unwrap();
        session.select_quiz("q1").unwrap();

        assert_eq!(vm.start_quiz().await.unwrap(), Page::Question);
        assert_eq!(session.snapshot().user_attempt_id.as_deref(), Some("a1"));
    }

    #[tokio::test]
    async fn start_quiz_requires_login() {
        let (api, session, vm) = setup(FakeApi::new().with_quiz("q1", "A", Vec::new()));
        session.select_quiz("q1").unwrap();
        assert!(matches!(
            vm.start_quiz().await,
            Err(ClientError::MissingSession(_))
        ));
        assert_eq!(api.called("create_attempt"), 0);
    }
}
