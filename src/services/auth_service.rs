use crate::models::auth::{RecoveryRequest, RegisterRequest, ValidateRecoveryRequest};
use crate::models::{LoginRequest, LoginResponse};
use crate::services::{ApiClient, ApiError, Auth};

/// Endpoints públicos de autenticación
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// POST /login
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    /// POST /admins (alta de cliente o admin)
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
    /// POST /recupera-senha: envía el código por email
    async fn request_recovery(&self, request: &RecoveryRequest) -> Result<(), ApiError>;
    /// POST /valida-senha
    async fn validate_recovery(&self, request: &ValidateRecoveryRequest) -> Result<(), ApiError>;
}

impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [API] Login para {}", request.email);
        self.post_json(&["login"], request, Auth::Public).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        log::info!("📝 [API] Registro de {} ({})", request.email, request.tipo_usuario);
        self.post_unit(&["admins"], request, Auth::Public).await
    }

    async fn request_recovery(&self, request: &RecoveryRequest) -> Result<(), ApiError> {
        self.post_unit(&["recupera-senha"], request, Auth::Public).await
    }

    async fn validate_recovery(&self, request: &ValidateRecoveryRequest) -> Result<(), ApiError> {
        self.post_unit(&["valida-senha"], request, Auth::Public).await
    }
}
