use serde::{Deserialize, Serialize};

/// Política de orden para respuestas de fetch solapadas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchOrdering {
    /// Gana la respuesta que resuelve último (comportamiento histórico)
    LastResolved,
    /// Solo se aplica la respuesta de la petición emitida más reciente
    LatestIssued,
}

impl FetchOrdering {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "last-resolved" | "last_resolved" => Some(Self::LastResolved),
            "latest-issued" | "latest_issued" => Some(Self::LatestIssued),
            _ => None,
        }
    }
}

impl Default for FetchOrdering {
    fn default() -> Self {
        Self::LastResolved
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Longitud mínima del término de búsqueda (en caracteres)
    pub min_search_len: usize,
    pub fetch_ordering: FetchOrdering,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3333".to_string(),
            backend_url_production: "https://api.imob.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            min_search_len: 2,
            fetch_ordering: FetchOrdering::LastResolved,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            min_search_len: option_env!("MIN_SEARCH_LEN")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_search_len),
            fetch_ordering: option_env!("FETCH_ORDERING")
                .and_then(FetchOrdering::parse)
                .unwrap_or(defaults.fetch_ordering),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
