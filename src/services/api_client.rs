// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un método por operación del backend. Todas las respuestas pasan por
// `decode`, que convierte los status no-2xx en `ClientError::Http`.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::CONFIG;
use crate::error::{ClientError, ClientResult};
use crate::models::*;
use crate::services::QuizApi;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// URL absoluta; cada segmento va percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Network(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        log::debug!("🌐 [API] GET {}", url);
        let response = Request::get(url.as_str()).send().await?;
        decode(response).await
    }

    async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> ClientResult<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        log::debug!("🌐 [API] {:?} {}", method, url);
        let builder = match method {
            Method::Post => Request::post(url.as_str()),
            Method::Put => Request::put(url.as_str()),
            Method::Patch => Request::patch(url.as_str()),
        };
        let request = builder
            .json(body)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        let response = request.send().await?;
        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Post,
    Put,
    Patch,
}

/// Mapeo centralizado de errores HTTP
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    if response.ok() {
        return Ok(response.json::<T>().await?);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = ApiMessage::from_body(&body).unwrap_or_else(|| response.status_text());
    log::warn!("⚠️ [API] HTTP {}: {}", status, message);
    Err(ClientError::http(status, message))
}

#[async_trait(?Send)]
impl QuizApi for ApiClient {
    async fn list_quizzes(&self) -> ClientResult<Vec<Quiz>> {
        let response: QuizzesResponse = self.get(&["quiz"]).await?;
        log::info!("✅ [API] {} quizzes recibidos", response.quizzes.len());
        Ok(response.quizzes)
    }

    async fn get_quiz(&self, quiz_id: &str) -> ClientResult<QuizDetail> {
        self.get(&["quiz", quiz_id]).await
    }

    async fn get_questions(&self, quiz_id: &str) -> ClientResult<Vec<Question>> {
        let response: QuestionsResponse = self.get(&["quiz", quiz_id, "questions"]).await?;
        Ok(response.questions)
    }

    async fn create_quiz(&self, input: &QuizInput) -> ClientResult<Quiz> {
        let envelope: QuizEnvelope = self.send_json(Method::Post, &["quiz"], input).await?;
        log::info!("✅ [API] Quiz creado: {}", envelope.quiz.quiz_id);
        Ok(envelope.quiz)
    }

    async fn update_quiz(&self, quiz_id: &str, input: &QuizInput) -> ClientResult<Quiz> {
        let envelope: QuizEnvelope = self
            .send_json(Method::Put, &["quiz", quiz_id], input)
            .await?;
        Ok(envelope.quiz)
    }

    async fn create_question(&self, quiz_id: &str, question: &NewQuestion) -> ClientResult<String> {
        let created: CreatedQuestion = self
            .send_json(Method::Post, &["quiz", quiz_id, "question"], question)
            .await?;
        Ok(created.question_id)
    }

    async fn set_quiz_visibility(&self, quiz_id: &str, visible: bool) -> ClientResult<()> {
        let _: ApiMessage = self
            .send_json(
                Method::Patch,
                &["quiz", quiz_id, "visibility"],
                &VisibilityRequest { visible },
            )
            .await?;
        Ok(())
    }

    async fn create_attempt(&self, quiz_id: &str, user_id: &str) -> ClientResult<String> {
        let body = CreateAttemptRequest {
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
        };
        let created: CreateAttemptResponse =
            self.send_json(Method::Post, &["attempts"], &body).await?;
        log::info!("✅ [API] Intento creado: {}", created.user_attempt_id);
        Ok(created.user_attempt_id)
    }

    async fn list_attempts(&self, user_id: &str) -> ClientResult<Vec<Attempt>> {
        let response: AttemptsResponse = self.get(&["attempts", user_id]).await?;
        Ok(response.attempts)
    }

    async fn get_attempt_result(&self, key: &AttemptKey) -> ClientResult<AttemptResult> {
        self.get(&["attempts", &key.user_id, &key.quiz_id, &key.attempt_id])
            .await
    }

    async fn get_attempt_details(&self, attempt_id: &str) -> ClientResult<AttemptDetails> {
        self.get(&["attempts", "details", attempt_id]).await
    }

    async fn current_question(&self, key: &AttemptKey) -> ClientResult<CurrentQuestion> {
        self.get(&[
            "quiz",
            "progress",
            &key.user_id,
            &key.quiz_id,
            &key.attempt_id,
        ])
        .await
    }

    async fn next_question(&self, key: &AttemptKey) -> ClientResult<NextStep> {
        // El fin del quiz llega como 400, así que no pasa por `decode`
        let url = self.endpoint(&["quiz", "progress", "next"])?;
        let response = Request::post(url.as_str())
            .json(key)
            .map_err(|e| ClientError::Serialization(e.to_string()))?
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        NextStep::from_response(status, &body)
    }

    async fn submit_answer(&self, request: &SubmitAnswerRequest) -> ClientResult<AnswerResult> {
        self.send_json(Method::Post, &["answers"], request).await
    }

    async fn list_answers(&self, key: &AttemptKey) -> ClientResult<Vec<AnswerRecord>> {
        let response: AnswersResponse = self
            .get(&["answers", &key.user_id, &key.quiz_id, &key.attempt_id])
            .await?;
        Ok(response.answers)
    }

    async fn find_user(&self, username: &str) -> ClientResult<User> {
        self.get(&["users", "username", username]).await
    }

    async fn list_students(&self) -> ClientResult<Vec<User>> {
        let response: StudentsResponse = self.get(&["user", "students"]).await?;
        Ok(response.students)
    }
}
