use thiserror::Error;

use crate::services::ApiError;

/// Fallo de login. El detalle real se loguea; al usuario siempre el mismo texto.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("Email ou senha inválida")]
    InvalidCredentials,
}

/// Fallos de acciones de las pantallas (formularios, paneles, listados)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("Faça login para continuar")]
    NotAuthenticated,
    /// Rol insuficiente (local) o 401/403 del backend
    #[error("Acesso negado")]
    Forbidden,
    /// Validación local antes de ir a la red
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Api(String),
}

impl ActionError {
    /// Traduce un error de API: 401/403 => `Forbidden`, resto => mensaje de la API o `fallback`
    pub fn from_api(error: ApiError, fallback: &str) -> Self {
        if error.is_unauthorized() {
            return ActionError::Forbidden;
        }
        log::error!("❌ [API] {}", error);
        ActionError::Api(error.user_message(fallback))
    }
}
