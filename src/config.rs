use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:3000/dev";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "https://quiz-api.example.com/prod";
const DEFAULT_MAX_QUIZ_TILES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub max_quiz_tiles: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            max_quiz_tiles: DEFAULT_MAX_QUIZ_TILES,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// (build.rs las inyecta desde `.env`)
    pub fn from_env() -> Self {
        Self::from_values(
            // BACKEND_URL queda como alias corto de la URL de desarrollo
            option_env!("BACKEND_URL_DEVELOPMENT").or(option_env!("BACKEND_URL")),
            option_env!("BACKEND_URL_PRODUCTION"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("MAX_QUIZ_TILES"),
        )
    }

    fn from_values(
        development: Option<&str>,
        production: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        max_quiz_tiles: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: development
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: production
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            // 0 no tiene sentido para la portada, se ignora
            max_quiz_tiles: max_quiz_tiles
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.max_quiz_tiles),
        }
    }

    /// URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Nivel para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Error
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
