use serde::{Deserialize, Serialize};

/// `POST /answers`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub user_id: String,
    pub quiz_id: String,
    pub attempt_id: String,
    pub question_id: String,
    pub user_answer: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    Pass,
    Fail,
}

/// Corrección del backend para una respuesta
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    #[serde(default)]
    pub status: Option<AnswerStatus>,
    pub correct_answers: String,
}

impl AnswerResult {
    /// Si el backend no manda `status`, se deduce comparando con la respuesta enviada
    pub fn is_pass(&self, user_answer: &str) -> bool {
        match self.status {
            Some(status) => status == AnswerStatus::Pass,
            None => self.correct_answers == user_answer,
        }
    }
}

/// Una respuesta guardada de un intento (`GET /answers/...`)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// Clave de la respuesta en el backend (`QUESTION#<id>`)
    #[serde(default, alias = "SK")]
    pub question_id: Option<String>,
    #[serde(default)]
    pub question_text: Option<String>,
    pub user_answer: String,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub status: Option<AnswerStatus>,
}

impl AnswerRecord {
    pub fn answered_question_id(&self) -> Option<&str> {
        self.question_id
            .as_deref()
            .map(|id| id.strip_prefix("QUESTION#").unwrap_or(id))
    }

    /// ¿Es la respuesta a esta pregunta? Por id, o por texto si el backend no manda la clave
    pub fn answers(&self, question_id: &str, question_text: &str) -> bool {
        match self.answered_question_id() {
            Some(id) => id == question_id,
            None => self.question_text.as_deref() == Some(question_text),
        }
    }

    pub fn is_pass(&self) -> bool {
        match (self.status, self.correct_answer.as_deref()) {
            (Some(status), _) => status == AnswerStatus::Pass,
            (None, Some(correct)) => correct == self.user_answer,
            (None, None) => false,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AnswersResponse {
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}
