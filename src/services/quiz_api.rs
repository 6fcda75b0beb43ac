// ============================================================================
// QUIZ API - Contrato del backend
// ============================================================================
// Los view-models dependen de este trait, no de gloo-net. En el navegador lo
// implementa `ApiClient`; en los tests, un backend falso en memoria.
// ============================================================================

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::*;

#[async_trait(?Send)]
pub trait QuizApi {
    async fn list_quizzes(&self) -> ClientResult<Vec<Quiz>>;
    async fn get_quiz(&self, quiz_id: &str) -> ClientResult<QuizDetail>;
    async fn get_questions(&self, quiz_id: &str) -> ClientResult<Vec<Question>>;
    async fn create_quiz(&self, input: &QuizInput) -> ClientResult<Quiz>;
    async fn update_quiz(&self, quiz_id: &str, input: &QuizInput) -> ClientResult<Quiz>;
    /// Devuelve el `questionId` asignado
    async fn create_question(&self, quiz_id: &str, question: &NewQuestion) -> ClientResult<String>;
    async fn set_quiz_visibility(&self, quiz_id: &str, visible: bool) -> ClientResult<()>;

    /// Devuelve el `userAttemptId` nuevo
    async fn create_attempt(&self, quiz_id: &str, user_id: &str) -> ClientResult<String>;
    async fn list_attempts(&self, user_id: &str) -> ClientResult<Vec<Attempt>>;
    async fn get_attempt_result(&self, key: &AttemptKey) -> ClientResult<AttemptResult>;
    async fn get_attempt_details(&self, attempt_id: &str) -> ClientResult<AttemptDetails>;

    async fn current_question(&self, key: &AttemptKey) -> ClientResult<CurrentQuestion>;
    async fn next_question(&self, key: &AttemptKey) -> ClientResult<NextStep>;
    async fn submit_answer(&self, request: &SubmitAnswerRequest) -> ClientResult<AnswerResult>;
    async fn list_answers(&self, key: &AttemptKey) -> ClientResult<Vec<AnswerRecord>>;

    async fn find_user(&self, username: &str) -> ClientResult<User>;
    async fn list_students(&self) -> ClientResult<Vec<User>>;
}
