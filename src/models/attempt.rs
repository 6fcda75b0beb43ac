use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Duración de un intento `{ minutes, seconds }`
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct TimeTaken {
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

impl fmt::Display for TimeTaken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m {:02}s", self.minutes, self.seconds)
    }
}

/// Un intento de un usuario sobre un quiz (`GET /attempts/{userId}`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub user_attempt_id: String,
    pub quiz_id: String,
    pub user_id: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub time_taken: Option<TimeTaken>,
    #[serde(default)]
    pub date_started: Option<String>,
}

impl Attempt {
    /// Fecha de inicio legible; el backend la guarda como `datetime` de Python
    pub fn started_label(&self) -> Option<String> {
        self.date_started.as_deref().and_then(format_timestamp)
    }
}

fn format_timestamp(raw: &str) -> Option<String> {
    const DISPLAY: &str = "%d/%m/%Y %H:%M";
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(parsed.format(DISPLAY).to_string());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.format(DISPLAY).to_string())
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AttemptsResponse {
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

/// `GET /attempts/{userId}/{quizId}/{attemptId}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResult {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub time_taken: Option<TimeTaken>,
    /// Posición 0-based de la pregunta en curso (solo mientras el intento sigue abierto)
    #[serde(default)]
    pub progress: Option<usize>,
}

/// `GET /attempts/details/{attemptId}`: a qué quiz y usuario pertenece un intento
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AttemptDetails {
    #[serde(default)]
    pub user_attempt_id: Option<String>,
    pub quiz_id: String,
    pub user_id: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttemptRequest {
    pub quiz_id: String,
    pub user_id: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttemptResponse {
    pub user_attempt_id: String,
}

/// Identifica un intento en las rutas de progreso y respuestas
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AttemptKey {
    pub user_id: String,
    pub quiz_id: String,
    pub attempt_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_taken_pads_seconds() {
        let t = TimeTaken { minutes: 3, seconds: 5 };
        assert_eq!(t.to_string(), "3m 05s");
    }

    #[test]
    fn attempt_decodes_backend_shape() {
        let json = r#"{
            "userAttemptId": "a1", "quizId": "q1", "userId": "u1",
            "score": 300, "timeTaken": {"minutes": 2, "seconds": 41},
            "dateStarted": "2024-11-20 14:03:05.123456"
        }"#;
        let attempt: Attempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.score, 300);
        assert_eq!(attempt.time_taken, Some(TimeTaken { minutes: 2, seconds: 41 }));
        assert_eq!(attempt.started_label().as_deref(), Some("20/11/2024 14:03"));
    }

    #[test]
    fn unparseable_date_has_no_label() {
        let attempt = Attempt {
            user_attempt_id: "a1".into(),
            quiz_id: "q1".into(),
            user_id: "u1".into(),
            score: 0,
            time_taken: None,
            date_started: Some("yesterday".into()),
        };
        assert_eq!(attempt.started_label(), None);
    }

    #[test]
    fn attempt_key_uses_camel_case() {
        let key = AttemptKey {
            user_id: "u1".into(),
            quiz_id: "q1".into(),
            attempt_id: "a1".into(),
        };
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["attemptId"], "a1");
        assert_eq!(json["userId"], "u1");
    }
}
