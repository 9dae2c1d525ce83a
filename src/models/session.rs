use serde::{Deserialize, Serialize};

use super::auth::UserType;

/// Foto en memoria de la sesión del usuario
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub user_name: String,
    pub user_email: String,
    pub user_type: UserType,
}

impl SessionSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.user_type == UserType::Admin
    }

    pub fn is_suporte(&self) -> bool {
        self.is_authenticated && self.user_type == UserType::Suporte
    }

    pub fn is_cliente(&self) -> bool {
        self.is_authenticated && self.user_type == UserType::Cliente
    }
}

/// Formato del blob `auth-storage`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub state: SessionSnapshot,
    pub version: u32,
}
