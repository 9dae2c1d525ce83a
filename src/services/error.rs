use thiserror::Error;

/// Fallos al hablar con la API remota
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Sin respuesta (red caída, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// 401/403
    #[error("Access denied (HTTP {0})")]
    Unauthorized(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Mensaje para mostrar al usuario: el `erro` de la API si vino, o el genérico
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}
