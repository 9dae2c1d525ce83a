// ============================================================================
// APP STATE - Contexto de la aplicación
// ============================================================================
// Una única instancia creada al arrancar y pasada explícitamente a quien la
// necesite. Sin globals: los handles se clonan (Rc) y comparten estado.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{ApiClient, PropertyApi};
use crate::utils::KeyValueStorage;

use super::{ListingState, SessionState};

pub struct AppState<A: PropertyApi = ApiClient> {
    pub config: Rc<AppConfig>,
    pub session: SessionState,
    pub listing: ListingState<A>,
    pub api: Rc<A>,
}

impl<A: PropertyApi> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: self.session.clone(),
            listing: self.listing.clone(),
            api: self.api.clone(),
        }
    }
}

impl AppState<ApiClient> {
    /// Estado real: API HTTP según la configuración
    pub fn new(config: AppConfig, storage: Rc<dyn KeyValueStorage>) -> Self {
        let api = Rc::new(ApiClient::with_base_url(config.backend_url()));
        Self::with_api(config, storage, api)
    }
}

impl<A: PropertyApi> AppState<A> {
    pub fn with_api(config: AppConfig, storage: Rc<dyn KeyValueStorage>, api: Rc<A>) -> Self {
        let listing = ListingState::new(api.clone(), config.fetch_ordering);
        Self {
            config: Rc::new(config),
            session: SessionState::new(storage),
            listing,
            api,
        }
    }

    /// Reconciliación de arranque: sesión desde storage + listado por defecto
    pub async fn bootstrap(&self) {
        self.session.check_auth();
        self.listing.fetch_all().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::sample_property;
    use crate::test_support::FakeApi;
    use crate::utils::{MemoryStorage, STORAGE_KEY_TOKEN, STORAGE_KEY_USER_TYPE};
    use futures::executor::block_on;

    #[test]
    fn bootstrap_reconciles_session_and_primes_listing() {
        let storage = Rc::new(MemoryStorage::with_entries([
            (STORAGE_KEY_TOKEN, "t1"),
            (STORAGE_KEY_USER_TYPE, "CLIENTE"),
        ]));
        let api = FakeApi::default();
        api.all.borrow_mut().push_back(Ok(vec![sample_property(1, "Centro")]));
        let state = AppState::with_api(AppConfig::default(), storage, Rc::new(api));

        block_on(state.bootstrap());

        assert!(state.session.is_cliente());
        assert_eq!(state.listing.items().len(), 1);
        assert_eq!(state.listing.current_search_term(), None);
    }

    #[test]
    fn clones_share_the_same_session() {
        let state = AppState::with_api(
            AppConfig::default(),
            Rc::new(MemoryStorage::new()),
            Rc::new(FakeApi::default()),
        );
        let handle = state.clone();
        handle.session.set_authenticated(true);
        assert!(state.session.is_authenticated());
    }
}
