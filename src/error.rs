// ============================================================================
// ERRORES - Taxonomía única del cliente
// ============================================================================
// Todos los fallos (red, parseo, sesión, DOM, validación) terminan aquí.
// Cada vista decide qué mostrar con `user_message()`; nunca se reintenta.
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Mensaje cuando falta un dato de sesión (primera visita, enlace viejo)
pub const DATA_NOT_AVAILABLE: &str = "Data not yet available.";
pub const QUIZ_NOT_FOUND: &str = "Quiz not found.";
pub const SELECT_AN_ANSWER: &str = "Please select an answer before submitting.";

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("missing session data: {0}")]
    MissingSession(&'static str),
    #[error("missing DOM element: #{0}")]
    MissingElement(String),
    #[error("{0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("action not allowed while {0}")]
    InvalidTransition(&'static str),
}

impl ClientError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// Texto que ve el usuario
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingSession(_) => DATA_NOT_AVAILABLE.to_string(),
            Self::Http { status: 404, .. } => QUIZ_NOT_FOUND.to_string(),
            Self::Validation(message) => message.clone(),
            Self::Network(_) => "Unable to reach the quiz server. Please try again.".to_string(),
            Self::Http { .. } | Self::Parse(_) => {
                "The quiz server returned an unexpected response.".to_string()
            }
            Self::InvalidTransition(_) => "Please wait for the current action to finish.".to_string(),
            Self::Serialization(_) | Self::MissingElement(_) | Self::Storage(_) => {
                "Something went wrong. Please reload the page.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(e: url::ParseError) -> Self {
        Self::Network(format!("invalid URL: {}", e))
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

// Frontera wasm_bindgen: las vistas devuelven JsValue
impl From<ClientError> for JsValue {
    fn from(e: ClientError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_maps_to_data_not_available() {
        let err = ClientError::MissingSession("selectedQuizId");
        assert_eq!(err.user_message(), DATA_NOT_AVAILABLE);
        assert_eq!(err.to_string(), "missing session data: selectedQuizId");
    }

    #[test]
    fn not_found_maps_to_quiz_not_found() {
        let err = ClientError::http(404, "Quiz not found");
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), QUIZ_NOT_FOUND);
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = ClientError::validation(SELECT_AN_ANSWER);
        assert_eq!(err.user_message(), SELECT_AN_ANSWER);
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
