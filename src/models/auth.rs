use std::fmt;

use serde::{Deserialize, Serialize};

/// Rol del usuario. `None` = anónimo o desconocido (string vacío en el wire)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    Admin,
    Cliente,
    Suporte,
    #[default]
    None,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "ADMIN",
            UserType::Cliente => "CLIENTE",
            UserType::Suporte => "SUPORTE",
            UserType::None => "",
        }
    }

    /// ADMIN y SUPORTE entran al dashboard
    pub fn is_staff(&self) -> bool {
        matches!(self, UserType::Admin | UserType::Suporte)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for UserType {
    fn from(raw: String) -> Self {
        normalize_user_type(&raw)
    }
}

impl From<UserType> for String {
    fn from(user_type: UserType) -> Self {
        user_type.as_str().to_string()
    }
}

/// Normaliza el rol recibido del backend o de localStorage.
///
/// Cualquier string no vacío que no sea un rol conocido se convierte en
/// `CLIENTE`. Es la política histórica (permisiva) y se mantiene tal cual.
/// Solo el string vacío es anónimo: uno con solo espacios ya es "no vacío".
pub fn normalize_user_type(raw: &str) -> UserType {
    if raw.is_empty() {
        return UserType::None;
    }
    match raw.trim().to_uppercase().as_str() {
        "ADMIN" => UserType::Admin,
        "CLIENTE" => UserType::Cliente,
        "SUPORTE" => UserType::Suporte,
        _ => UserType::Cliente,
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub usuario_tipo: Option<String>,
}

/// Alta de usuario (cliente o admin)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub tipo_usuario: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RecoveryRequest {
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRecoveryRequest {
    pub email: String,
    pub code: String,
    pub nova_senha: String,
}

/// Credenciales para endpoints autenticados, tal como están en localStorage
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Credentials {
    pub token: String,
    /// Rol persistido sin normalizar (se reenvía en `X-User-Type`)
    pub user_type: String,
}
