// ============================================================================
// AUTH VIEWMODEL - Login, registro, recuperación de contraseña y logout
// ============================================================================
// Escribe las claves sueltas de localStorage (lo que leen las demás pestañas)
// y deja que la sesión se reconcilie desde ahí.
// ============================================================================

use std::rc::Rc;

use crate::models::auth::{RecoveryRequest, RegisterRequest, ValidateRecoveryRequest};
use crate::models::{normalize_user_type, LoginRequest, UserType};
use crate::services::{ApiClient, AuthApi, PropertyApi};
use crate::state::{ListingState, SessionState};
use crate::utils::{
    read_string, STORAGE_KEY_EMAIL, STORAGE_KEY_REDIRECT, STORAGE_KEY_TOKEN, STORAGE_KEY_USER_NAME,
    STORAGE_KEY_USER_TYPE,
};

use super::navigation::{landing_for, Route};
use super::{ActionError, LoginError};

/// Contraseña con la que se dan de alta los administradores
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";
pub const MIN_PASSWORD_LEN: usize = 6;

const REGISTER_ERROR: &str = "Falha ao cadastrar";
const RECOVERY_REQUEST_ERROR: &str = "Erro ao enviar email de recuperação";
const RECOVERY_CONFIRM_ERROR: &str = "Erro ao alterar senha";

/// Tipo de alta permitido desde la interfaz
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationKind {
    /// Auto-registro con contraseña propia
    Cliente,
    /// Alta hecha por soporte, con la contraseña por defecto
    Admin,
}

impl RegistrationKind {
    fn user_type(self) -> UserType {
        match self {
            RegistrationKind::Cliente => UserType::Cliente,
            RegistrationKind::Admin => UserType::Admin,
        }
    }
}

pub struct AuthViewModel<A: AuthApi + PropertyApi = ApiClient> {
    api: Rc<A>,
    session: SessionState,
    listing: ListingState<A>,
}

impl<A: AuthApi + PropertyApi> AuthViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState, listing: ListingState<A>) -> Self {
        Self { api, session, listing }
    }

    /// Login. Devuelve la ruta a la que hay que ir después.
    pub async fn login(&self, email: &str, senha: &str) -> Result<Route, LoginError> {
        log::info!("🔐 [AUTH] Iniciando login de {}", email);

        let request = LoginRequest {
            email: email.to_string(),
            senha: senha.to_string(),
        };
        let response = self.api.login(&request).await.map_err(|e| {
            log::warn!("⚠️ [AUTH] Login rechazado: {}", e);
            LoginError::InvalidCredentials
        })?;

        let Some(token) = response.token.filter(|t| !t.is_empty()) else {
            log::warn!("⚠️ [AUTH] Respuesta de login sin token");
            return Err(LoginError::InvalidCredentials);
        };

        let user_name = response
            .nome
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());
        let user_type = response
            .usuario_tipo
            .map(|raw| normalize_user_type(&raw))
            .filter(|t| *t != UserType::None)
            .unwrap_or(UserType::Cliente);

        let storage = self.session.storage();
        for (key, value) in [
            (STORAGE_KEY_TOKEN, token.as_str()),
            (STORAGE_KEY_USER_NAME, user_name.as_str()),
            (STORAGE_KEY_EMAIL, email),
            (STORAGE_KEY_USER_TYPE, user_type.as_str()),
        ] {
            if let Err(e) = storage.set_item(key, value) {
                log::error!("❌ [AUTH] Error guardando '{}': {}", key, e);
            }
        }
        self.session.check_auth();

        log::info!("✅ [AUTH] Login OK: {} ({})", user_name, user_type);
        Ok(self.take_redirect().unwrap_or_else(|| landing_for(user_type)))
    }

    /// Guarda adónde volver tras el login (p. ej. la ficha que se estaba viendo)
    pub fn remember_redirect(&self, route: &Route) {
        if let Err(e) = self.session.storage().set_item(STORAGE_KEY_REDIRECT, &route.path()) {
            log::error!("❌ [AUTH] Error guardando redirect: {}", e);
        }
    }

    /// Lee y borra el redirect pendiente. Si no es una ruta conocida, se descarta.
    fn take_redirect(&self) -> Option<Route> {
        let storage = self.session.storage();
        let path = read_string(storage.as_ref(), STORAGE_KEY_REDIRECT)?;
        if let Err(e) = storage.remove_item(STORAGE_KEY_REDIRECT) {
            log::error!("❌ [AUTH] Error eliminando redirect: {}", e);
        }
        let route = Route::from_path(&path);
        if route.is_none() {
            log::warn!("⚠️ [AUTH] Redirect desconocido ignorado: {}", path);
        }
        route
    }

    /// Alta de usuario. Para clientes valida la confirmación de contraseña;
    /// los admins se crean con `DEFAULT_ADMIN_PASSWORD`.
    pub async fn register(
        &self,
        kind: RegistrationKind,
        nome: &str,
        email: &str,
        senha: &str,
        confirm_senha: &str,
    ) -> Result<(), ActionError> {
        let senha = match kind {
            RegistrationKind::Cliente if senha != confirm_senha => {
                return Err(ActionError::Invalid("As senhas não correspondem".into()));
            }
            RegistrationKind::Cliente => senha,
            RegistrationKind::Admin => DEFAULT_ADMIN_PASSWORD,
        };

        let request = RegisterRequest {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: senha.to_string(),
            tipo_usuario: kind.user_type().as_str().to_string(),
        };
        self.api
            .register(&request)
            .await
            .map_err(|e| ActionError::from_api(e, REGISTER_ERROR))?;

        log::info!("✅ [AUTH] Cadastro realizado: {} ({})", email, request.tipo_usuario);
        Ok(())
    }

    /// Paso 1 de la recuperación: el backend envía un código por email
    pub async fn request_recovery(&self, email: &str) -> Result<(), ActionError> {
        let request = RecoveryRequest {
            email: email.to_string(),
        };
        self.api
            .request_recovery(&request)
            .await
            .map_err(|e| ActionError::from_api(e, RECOVERY_REQUEST_ERROR))?;
        log::info!("📧 [AUTH] Código de recuperação enviado a {}", email);
        Ok(())
    }

    /// Paso 2: código + nueva contraseña (validada localmente antes de enviar)
    pub async fn confirm_recovery(
        &self,
        email: &str,
        code: &str,
        nova_senha: &str,
        confirm_senha: &str,
    ) -> Result<(), ActionError> {
        if nova_senha != confirm_senha {
            return Err(ActionError::Invalid("As senhas não coincidem".into()));
        }
        if nova_senha.chars().count() < MIN_PASSWORD_LEN {
            return Err(ActionError::Invalid(format!(
                "A senha deve ter pelo menos {} caracteres",
                MIN_PASSWORD_LEN
            )));
        }

        let request = ValidateRecoveryRequest {
            email: email.to_string(),
            code: code.to_string(),
            nova_senha: nova_senha.to_string(),
        };
        self.api
            .validate_recovery(&request)
            .await
            .map_err(|e| ActionError::from_api(e, RECOVERY_CONFIRM_ERROR))?;
        log::info!("🔑 [AUTH] Senha alterada para {}", email);
        Ok(())
    }

    /// Cierra sesión y vuelve al listado por defecto
    pub async fn logout(&self) {
        self.session.logout();
        self.listing.reset_all().await;
    }
}
