// ============================================================================
// SESSION STATE - Quién usa la aplicación y qué puede hacer
// ============================================================================
// Fuente única de verdad para auth + rol. Se sincroniza con el medio
// persistente (localStorage) y se reconcilia bajo demanda con `check_auth`.
// Nunca falla: cualquier dato ausente o corrupto degrada a "anónimo".
// ============================================================================

use std::rc::Rc;

use crate::models::{normalize_user_type, Credentials, PersistedSession, SessionSnapshot, UserType};
use crate::utils::{
    load_from_storage, read_string, save_to_storage, KeyValueStorage, SESSION_BLOB_VERSION, SESSION_KEYS,
    STORAGE_KEY_EMAIL, STORAGE_KEY_SESSION_BLOB, STORAGE_KEY_TOKEN, STORAGE_KEY_USER_NAME, STORAGE_KEY_USER_TYPE,
};

use super::ReactiveState;

/// Lee token/nombre/email/rol del medio persistente y arma la foto equivalente
pub fn read_persisted(storage: &dyn KeyValueStorage) -> SessionSnapshot {
    let token = read_string(storage, STORAGE_KEY_TOKEN);
    SessionSnapshot {
        is_authenticated: token.is_some_and(|t| !t.is_empty()),
        user_name: read_string(storage, STORAGE_KEY_USER_NAME).unwrap_or_default(),
        user_email: read_string(storage, STORAGE_KEY_EMAIL).unwrap_or_default(),
        user_type: normalize_user_type(&read_string(storage, STORAGE_KEY_USER_TYPE).unwrap_or_default()),
    }
}

/// Diff campo a campo: `Some(nueva foto)` solo si algo cambió
pub fn reconcile(current: &SessionSnapshot, persisted: &SessionSnapshot) -> Option<SessionSnapshot> {
    if current == persisted {
        None
    } else {
        Some(persisted.clone())
    }
}

/// Estado de sesión
#[derive(Clone)]
pub struct SessionState {
    snapshot: ReactiveState<SessionSnapshot>,
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionState {
    /// Crea el estado hidratando desde el blob `auth-storage` si existe
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let initial = load_from_storage::<PersistedSession>(storage.as_ref(), STORAGE_KEY_SESSION_BLOB)
            .map(|blob| blob.state)
            .unwrap_or_default();

        if initial.is_authenticated {
            log::info!("💾 [SESSION] Sesión restaurada: {} ({})", initial.user_email, initial.user_type);
        }

        Self {
            snapshot: ReactiveState::new(initial),
            storage,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.with(|s| s.is_authenticated)
    }

    pub fn user_name(&self) -> String {
        self.snapshot.with(|s| s.user_name.clone())
    }

    pub fn user_email(&self) -> String {
        self.snapshot.with(|s| s.user_email.clone())
    }

    pub fn user_type(&self) -> UserType {
        self.snapshot.with(|s| s.user_type)
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_admin)
    }

    pub fn is_suporte(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_suporte)
    }

    pub fn is_cliente(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_cliente)
    }

    pub fn set_authenticated(&self, value: bool) {
        self.apply(|s| s.is_authenticated = value);
    }

    pub fn set_user_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.apply(|s| s.user_name = name);
    }

    pub fn set_user_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.apply(|s| s.user_email = email);
    }

    /// Normaliza el rol (trim + mayúsculas, desconocido => CLIENTE)
    pub fn set_user_type(&self, raw: &str) {
        let user_type = normalize_user_type(raw);
        self.apply(|s| s.user_type = user_type);
    }

    /// Relee el medio persistente y aplica la foto solo si difiere.
    /// Devuelve si hubo transición.
    pub fn check_auth(&self) -> bool {
        let persisted = read_persisted(self.storage.as_ref());
        let Some(next) = self.snapshot.with(|current| reconcile(current, &persisted)) else {
            return false;
        };

        log::info!(
            "🔄 [SESSION] Reconciliado desde storage: autenticado={} rol='{}'",
            next.is_authenticated,
            next.user_type
        );
        self.snapshot.set(next);
        self.persist_blob();
        true
    }

    /// Borra las claves persistidas y vuelve al estado anónimo, siempre
    pub fn logout(&self) {
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove_item(key) {
                log::error!("❌ [SESSION] Error eliminando '{}': {}", key, e);
            }
        }
        log::info!("👋 [SESSION] Logout");
        self.snapshot.set(SessionSnapshot::anonymous());
        self.persist_blob();
    }

    /// Token y rol crudo para endpoints autenticados
    pub fn credentials(&self) -> Option<Credentials> {
        let token = read_string(self.storage.as_ref(), STORAGE_KEY_TOKEN).filter(|t| !t.is_empty())?;
        Some(Credentials {
            token,
            user_type: read_string(self.storage.as_ref(), STORAGE_KEY_USER_TYPE).unwrap_or_default(),
        })
    }

    pub fn storage(&self) -> Rc<dyn KeyValueStorage> {
        self.storage.clone()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.snapshot.subscribe(callback);
    }

    /// Transiciones emitidas (para tests y logs)
    pub fn change_count(&self) -> u64 {
        self.snapshot.notification_count()
    }

    fn apply(&self, mutate: impl FnOnce(&mut SessionSnapshot)) {
        let mut next = self.snapshot();
        mutate(&mut next);
        if self.snapshot.set_if_changed(next) {
            self.persist_blob();
        }
    }

    fn persist_blob(&self) {
        let blob = PersistedSession {
            state: self.snapshot(),
            version: SESSION_BLOB_VERSION,
        };
        if let Err(e) = save_to_storage(self.storage.as_ref(), STORAGE_KEY_SESSION_BLOB, &blob) {
            log::error!("❌ [SESSION] Error guardando sesión en storage: {}", e);
        }
    }
}
