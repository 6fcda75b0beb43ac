use serde::{Deserialize, Serialize};

/// Cuerpo genérico `{ "message": ... }` que el backend usa en errores y confirmaciones
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Extrae el mensaje de un cuerpo de respuesta; texto plano si no es JSON
    pub fn from_body(body: &str) -> Option<String> {
        match serde_json::from_str::<ApiMessage>(body) {
            Ok(parsed) => parsed.message,
            Err(_) => {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}
