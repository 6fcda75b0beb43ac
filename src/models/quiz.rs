use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Resumen de un quiz tal como lo devuelve `GET /quiz`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct QuizzesResponse {
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

/// `GET /quiz/{quizId}`: el resumen más el número de preguntas
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuizDetail {
    #[serde(flatten)]
    pub quiz: Quiz,
    #[serde(default)]
    pub question_count: Option<usize>,
}

/// Cuerpo de `POST /quiz` y `PUT /quiz/{quizId}`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct QuizInput {
    pub title: String,
    pub description: String,
}

impl QuizInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Título obligatorio; la descripción puede ir vacía
    pub fn validate(&self) -> ClientResult<()> {
        if self.title.trim().is_empty() {
            return Err(ClientError::validation("Please enter a quiz title."));
        }
        Ok(())
    }
}

/// Respuesta de creación/actualización: `{ message, quiz }`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct QuizEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub quiz: Quiz,
}

/// Cuerpo de `PATCH /quiz/{quizId}/visibility` (borrado lógico)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct VisibilityRequest {
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_flattens_summary_fields() {
        let json = r#"{"quizId":"q1","title":"Python Basics","description":"Basics","questionCount":4}"#;
        let detail: QuizDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.quiz.quiz_id, "q1");
        assert_eq!(detail.question_count, Some(4));
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let quiz: Quiz = serde_json::from_str(r#"{"quizId":"q1","title":"A"}"#).unwrap();
        assert_eq!(quiz.description, "");
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(QuizInput::new("   ", "desc").validate().is_err());
        assert!(QuizInput::new("AWS Fundamentals", "").validate().is_ok());
    }
}
