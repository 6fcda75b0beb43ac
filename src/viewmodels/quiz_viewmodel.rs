// ============================================================================
// QUIZ VIEWMODEL - Orquesta la máquina de progresión contra el backend
// ============================================================================
// La corrección y el avance los decide el servidor. Cada acción:
//   1. valida contra QuizProgress (sin red)
//   2. marca busy y hace la petición
//   3. aplica el resultado solo si la petición tuvo éxito
// Nunca se mantiene un préstamo de QuizProgress a través de un await.
// ============================================================================

use std::rc::Rc;

use crate::error::{ClientError, ClientResult};
use crate::models::SubmitAnswerRequest;
use crate::services::QuizApi;
use crate::state::{ActionMode, Evaluation, QuizProgress, ReactiveState, SessionState};
use crate::utils::Page;

pub struct QuizViewModel<A: QuizApi> {
    api: Rc<A>,
    session: SessionState,
    progress: ReactiveState<QuizProgress>,
}

impl<A: QuizApi> QuizViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState, progress: ReactiveState<QuizProgress>) -> Self {
        Self {
            api,
            session,
            progress,
        }
    }

    pub fn progress(&self) -> &ReactiveState<QuizProgress> {
        &self.progress
    }

    /// Carga la pregunta en curso del intento guardado en sesión.
    /// El total y la posición son informativos: si fallan se sigue sin ellos.
    pub async fn load(&self) -> ClientResult<()> {
        let key = self.session.snapshot().attempt_key()?;

        let total = match self.api.get_quiz(&key.quiz_id).await {
            Ok(detail) => detail.question_count.unwrap_or(0),
            Err(e) => {
                log::warn!("⚠️ [QUIZ] Total de preguntas no disponible: {}", e);
                0
            }
        };
        let position = match self.api.get_attempt_result(&key).await {
            Ok(result) => result.progress.unwrap_or(0),
            Err(e) => {
                log::warn!("⚠️ [QUIZ] Posición del intento no disponible: {}", e);
                0
            }
        };

        // El backend sigue devolviendo la última pregunta aunque ya esté
        // respondida: las respuestas guardadas deciden si toca corregir o no
        let question = self.api.current_question(&key).await?;
        let answered = self
            .api
            .list_answers(&key)
            .await?
            .into_iter()
            .find(|record| record.answers(&question.question_id, &question.question_text));
        self.session.set_current_question(&question.question_id)?;

        let mut progress = QuizProgress::new(total);
        match answered {
            Some(record) => {
                progress.restore(question, position, &record);
                if progress.is_last_question() {
                    log::info!("🏁 [QUIZ] Intento {} ya completado", key.attempt_id);
                    progress.finish()?;
                } else {
                    log::info!("↩️ [QUIZ] Pregunta {} ya corregida", position + 1);
                }
            }
            None => {
                log::info!(
                    "✅ [QUIZ] Pregunta {} cargada ({})",
                    question.question_id,
                    position + 1
                );
                progress.present(question, position);
            }
        }
        self.progress.set(progress);
        Ok(())
    }

    pub fn select(&self, index: usize) -> ClientResult<()> {
        self.progress.update(|p| p.select(index))
    }

    /// AwaitingAnswer → ShowingEvaluation
    pub async fn submit(&self) -> ClientResult<Evaluation> {
        let submission = self.progress.with(|p| p.submission())?;
        let key = self.session.snapshot().attempt_key()?;
        let request = SubmitAnswerRequest {
            user_id: key.user_id,
            quiz_id: key.quiz_id,
            attempt_id: key.attempt_id,
            question_id: submission.question_id.clone(),
            user_answer: submission.answer.clone(),
        };

        self.progress.update(|p| p.set_busy(true));
        let graded = self.api.submit_answer(&request).await;
        let evaluation = self.progress.update(|p| {
            p.set_busy(false);
            graded.and_then(|result| p.apply_grade(&result))
        })?;

        self.session.set_current_question(&submission.question_id)?;
        log::info!(
            "📝 [QUIZ] Respuesta '{}' corregida: {}",
            submission.answer,
            if evaluation.passed { "pass" } else { "fail" }
        );
        Ok(evaluation)
    }

    /// ShowingEvaluation → siguiente pregunta, o resultados si no quedan
    pub async fn next(&self) -> ClientResult<Option<Page>> {
        let (showing, busy) = self
            .progress
            .with(|p| (p.evaluation().is_some(), p.is_busy()));
        if busy {
            return Err(ClientError::InvalidTransition("waiting for the server"));
        }
        if !showing {
            return Err(ClientError::InvalidTransition("not showing an evaluation"));
        }
        let key = self.session.snapshot().attempt_key()?;

        self.progress.update(|p| p.set_busy(true));
        let step = self.api.next_question(&key).await;
        self.progress.update(|p| {
            p.set_busy(false);
            step.and_then(|step| p.advance(step))
        })?;

        match self.progress.with(|p| p.question().map(|q| q.question_id.clone())) {
            Some(question_id) if !self.progress.with(|p| p.is_finished()) => {
                self.session.set_current_question(&question_id)?;
                Ok(None)
            }
            _ => {
                log::info!("🏁 [QUIZ] No quedan preguntas");
                Ok(Some(Page::Results))
            }
        }
    }

    /// "View Results": única transición válida tras la última corrección
    pub fn finish(&self) -> ClientResult<Page> {
        self.progress.update(|p| p.finish())?;
        Ok(Page::Results)
    }

    /// Botón de acción: Submit / Next / View Results según el estado.
    /// Devuelve la página a la que navegar, si toca.
    pub async fn perform_action(&self) -> ClientResult<Option<Page>> {
        match self.progress.with(|p| p.action_mode()) {
            ActionMode::Submit => self.submit().await.map(|_| None),
            ActionMode::Next => self.next().await,
            ActionMode::ViewResults => self.finish().map(Some),
        }
    }
}
