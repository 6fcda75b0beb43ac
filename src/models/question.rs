use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::models::ApiMessage;

/// Todas las preguntas son de opción múltiple con 4 opciones
pub const OPTIONS_PER_QUESTION: usize = 4;

const NO_MORE_QUESTIONS: &str = "No more questions";

/// Pregunta completa (vista del profesor, `GET /quiz/{quizId}/questions`)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Pregunta en curso de un intento; el backend nunca manda la respuesta correcta
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CurrentQuestion {
    pub question_id: String,
    pub question_text: String,
    pub options: Vec<String>,
}

impl CurrentQuestion {
    /// Índice de la opción que coincide literalmente con `answer`
    pub fn option_index(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|option| option == answer)
    }
}

/// Resultado de `POST /quiz/progress/next`
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NextStep {
    Question(CurrentQuestion),
    Finished,
}

impl NextStep {
    /// Interpreta la respuesta cruda del backend.
    /// El fin del quiz llega como `{"message":"No more questions"}`, con 400
    /// o con un 2xx. Cualquier otro cuerpo 2xx que no sea una pregunta es un
    /// error de formato.
    pub fn from_response(status: u16, body: &str) -> ClientResult<Self> {
        if (200..300).contains(&status) {
            return match serde_json::from_str::<CurrentQuestion>(body) {
                Ok(question) => Ok(NextStep::Question(question)),
                Err(e) if is_end_marker(body) => {
                    log::debug!("🏁 [QUIZ] Fin del quiz en 2xx ({})", e);
                    Ok(NextStep::Finished)
                }
                Err(e) => Err(ClientError::Parse(e.to_string())),
            };
        }

        let message = ApiMessage::from_body(body).unwrap_or_default();
        if status == 400 && message.contains(NO_MORE_QUESTIONS) {
            return Ok(NextStep::Finished);
        }
        Err(ClientError::http(status, message))
    }
}

fn is_end_marker(body: &str) -> bool {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .is_some_and(|message| message.contains(NO_MORE_QUESTIONS))
}

/// Cuerpo de `POST /quiz/{quizId}/question`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl NewQuestion {
    pub fn validate(&self) -> ClientResult<()> {
        if self.question_text.trim().is_empty() {
            return Err(ClientError::validation("Please enter the question text."));
        }
        if self.options.len() != OPTIONS_PER_QUESTION
            || self.options.iter().any(|o| o.trim().is_empty())
        {
            return Err(ClientError::validation(format!(
                "Please fill in all {} options.",
                OPTIONS_PER_QUESTION
            )));
        }
        // Comparación literal, igual que la corrección del backend
        if !self.options.iter().any(|o| *o == self.correct_answer) {
            return Err(ClientError::validation(
                "The correct answer must match one of the options.",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatedQuestion {
    pub question_id: String,
}
