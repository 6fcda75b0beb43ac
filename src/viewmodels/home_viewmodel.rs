// ============================================================================
// HOME VIEWMODEL - Portada con las tarjetas de quizzes
// ============================================================================

use std::rc::Rc;

use crate::error::ClientResult;
use crate::models::Quiz;
use crate::services::QuizApi;
use crate::state::SessionState;
use crate::utils::{Page, QUIZ_ID_PARAM, QUIZ_TILE_IMAGES};

/// Una tarjeta de la portada
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizTile {
    pub quiz_id: String,
    pub title: String,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub href: String,
}

/// Como mucho `max` tarjetas, en el orden del backend, con la ilustración en ciclo
pub fn visible_tiles(quizzes: &[Quiz], max: usize) -> Vec<QuizTile> {
    quizzes
        .iter()
        .take(max)
        .enumerate()
        .map(|(i, quiz)| {
            let (image, image_alt) = QUIZ_TILE_IMAGES[i % QUIZ_TILE_IMAGES.len()];
            QuizTile {
                quiz_id: quiz.quiz_id.clone(),
                title: quiz.title.clone(),
                image,
                image_alt,
                href: format!(
                    "{}?{}={}",
                    Page::Description.file_name(),
                    QUIZ_ID_PARAM,
                    quiz.quiz_id
                ),
            }
        })
        .collect()
}

pub struct HomeViewModel<A: QuizApi> {
    api: Rc<A>,
    session: SessionState,
}

impl<A: QuizApi> HomeViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    /// Pide la lista y la cachea para la página de descripción
    pub async fn load_quizzes(&self) -> ClientResult<Vec<Quiz>> {
        let quizzes = self.api.list_quizzes().await?;
        if let Err(e) = self.session.cache_quizzes(&quizzes) {
            log::warn!("⚠️ [HOME] No se pudo cachear la lista: {}", e);
        }
        log::info!("✅ [HOME] {} quizzes disponibles", quizzes.len());
        Ok(quizzes)
    }

    /// Click en una tarjeta: guarda el quiz y devuelve la página destino
    pub fn select_quiz(&self, quiz_id: &str) -> ClientResult<Page> {
        self.session.select_quiz(quiz_id)?;
        log::info!("📌 [HOME] Quiz seleccionado: {}", quiz_id);
        Ok(Page::Description)
    }
}
