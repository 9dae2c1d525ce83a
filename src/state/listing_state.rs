// ============================================================================
// LISTING STATE - Colección de inmuebles mostrada + modo búsqueda
// ============================================================================
// Cada fetch exitoso reemplaza `items` entero (sin merge incremental).
// Un fallo deja `items` como estaba y marca `error` con un mensaje fijo.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::config::FetchOrdering;
use crate::models::Property;
use crate::services::{ApiClient, ApiError, PropertyApi};

use super::ReactiveState;

pub const FETCH_ALL_ERROR: &str = "Falha ao carregar imóveis";
pub const SEARCH_ERROR: &str = "Falha ao buscar imóveis";
pub const RESET_ERROR: &str = "Falha ao resetar imóveis";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingSnapshot {
    pub items: Vec<Property>,
    /// `None` = colección por defecto; `Some` mientras hay una búsqueda activa
    pub current_search_term: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Interés del llamador en una respuesta. Si se cancela antes de que llegue,
/// la respuesta se descarta: ni `items` ni `error` cambian, solo se apaga
/// `loading` si no queda otra petición más nueva en vuelo.
#[derive(Clone, Debug, Default)]
pub struct FetchScope {
    cancelled: Rc<Cell<bool>>,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Estado del listado
pub struct ListingState<A: PropertyApi = ApiClient> {
    api: Rc<A>,
    snapshot: ReactiveState<ListingSnapshot>,
    ordering: FetchOrdering,
    issued: Rc<Cell<u64>>,
}

impl<A: PropertyApi> Clone for ListingState<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            snapshot: self.snapshot.clone(),
            ordering: self.ordering,
            issued: self.issued.clone(),
        }
    }
}

impl<A: PropertyApi> ListingState<A> {
    pub fn new(api: Rc<A>, ordering: FetchOrdering) -> Self {
        Self {
            api,
            snapshot: ReactiveState::new(ListingSnapshot::default()),
            ordering,
            issued: Rc::new(Cell::new(0)),
        }
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        self.snapshot.get()
    }

    pub fn items(&self) -> Vec<Property> {
        self.snapshot.with(|s| s.items.clone())
    }

    pub fn current_search_term(&self) -> Option<String> {
        self.snapshot.with(|s| s.current_search_term.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.snapshot.with(|s| s.error.clone())
    }

    pub fn ordering(&self) -> FetchOrdering {
        self.ordering
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.snapshot.subscribe(callback);
    }

    /// Reemplazo directo, para parches optimistas tras acciones CRUD
    pub fn set_items(&self, items: Vec<Property>) {
        self.snapshot.update(|s| s.items = items);
    }

    /// GET /imoveis. No toca `current_search_term`: eso es cosa del llamador.
    pub async fn fetch_all(&self) {
        self.fetch_all_scoped(&FetchScope::new()).await
    }

    pub async fn fetch_all_scoped(&self, scope: &FetchScope) {
        let ticket = self.begin(|_| {});
        let result = self.api.fetch_properties().await;
        if self.accepts(ticket, scope) {
            self.apply(ticket, result, FETCH_ALL_ERROR);
        }
    }

    /// Búsqueda por término. La longitud mínima la valida el llamador.
    ///
    /// `Some(items)` con lo aplicado al store (vacío si falló); `None` si la
    /// respuesta se descartó (llamador cancelado o petición más nueva).
    pub async fn fetch_by_term(&self, term: &str) -> Option<Vec<Property>> {
        self.fetch_by_term_scoped(term, &FetchScope::new()).await
    }

    pub async fn fetch_by_term_scoped(&self, term: &str, scope: &FetchScope) -> Option<Vec<Property>> {
        let ticket = self.begin(|s| s.current_search_term = Some(term.to_string()));
        let result = self.api.search_properties(term).await;
        if !self.accepts(ticket, scope) {
            return None;
        }
        let found = result.as_ref().cloned().unwrap_or_default();
        self.apply(ticket, result, SEARCH_ERROR);
        Some(found)
    }

    /// Vuelve a la colección por defecto y limpia el término
    pub async fn reset_all(&self) {
        self.reset_all_scoped(&FetchScope::new()).await
    }

    pub async fn reset_all_scoped(&self, scope: &FetchScope) {
        let ticket = self.begin(|s| s.current_search_term = None);
        let result = self.api.fetch_properties().await;
        if self.accepts(ticket, scope) {
            self.apply(ticket, result, RESET_ERROR);
        }
    }

    fn begin(&self, prepare: impl FnOnce(&mut ListingSnapshot)) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        self.snapshot.update(|s| {
            s.loading = true;
            prepare(s);
        });
        ticket
    }

    /// Decide si la respuesta `ticket` se aplica al store.
    /// Una cancelada apaga `loading` salvo que haya otra petición pendiente más nueva.
    fn accepts(&self, ticket: u64, scope: &FetchScope) -> bool {
        let latest = ticket == self.issued.get();

        if scope.is_cancelled() {
            log::debug!("🚫 [LISTING] Respuesta #{} descartada: el llamador ya no está", ticket);
            if latest {
                self.snapshot.update(|s| s.loading = false);
            }
            return false;
        }
        if self.ordering == FetchOrdering::LatestIssued && !latest {
            log::debug!(
                "⏭️ [LISTING] Respuesta #{} descartada: hay una petición más nueva (#{})",
                ticket,
                self.issued.get()
            );
            return false;
        }
        true
    }

    fn apply(&self, ticket: u64, result: Result<Vec<Property>, ApiError>, error_message: &str) {
        match result {
            Ok(items) => {
                log::info!("✅ [LISTING] {} imóveis (petición #{})", items.len(), ticket);
                self.snapshot.update(|s| {
                    s.items = items;
                    s.loading = false;
                });
            }
            Err(e) => {
                log::error!("❌ [LISTING] {}: {}", error_message, e);
                self.snapshot.update(|s| {
                    s.error = Some(error_message.to_string());
                    s.loading = false;
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::sample_property;
    use crate::test_support::FakeApi;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    fn listing(api: FakeApi, ordering: FetchOrdering) -> ListingState<FakeApi> {
        ListingState::new(Rc::new(api), ordering)
    }

    #[test]
    fn fetch_all_replaces_items_in_server_order() {
        let api = FakeApi::default();
        api.all
            .borrow_mut()
            .push_back(Ok(vec![sample_property(3, "Norte"), sample_property(1, "Sul")]));
        let listing = listing(api, FetchOrdering::LastResolved);

        block_on(listing.fetch_all());

        let ids: Vec<i64> = listing.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(!listing.is_loading());
        assert_eq!(listing.error(), None);
    }

    #[test]
    fn fetch_all_leaves_search_term_alone() {
        let api = FakeApi::default();
        *api.search_result.borrow_mut() = Some(Ok(vec![sample_property(1, "Centro")]));
        let listing = listing(api, FetchOrdering::LastResolved);

        block_on(listing.fetch_by_term("casa"));
        block_on(listing.fetch_all());
        assert_eq!(listing.current_search_term().as_deref(), Some("casa"));
    }

    #[test]
    fn failure_keeps_stale_items_and_sets_fixed_error() {
        let api = FakeApi::default();
        api.all.borrow_mut().push_back(Ok(vec![sample_property(1, "Centro")]));
        api.all.borrow_mut().push_back(Err(ApiError::Network("offline".into())));
        let listing = listing(api, FetchOrdering::LastResolved);

        block_on(listing.fetch_all());
        block_on(listing.fetch_all());

        assert_eq!(listing.items().len(), 1);
        assert_eq!(listing.error().as_deref(), Some(FETCH_ALL_ERROR));
        assert!(!listing.is_loading());
    }

    #[test]
    fn search_sets_term_and_returns_results() {
        let api = FakeApi::default();
        *api.search_result.borrow_mut() = Some(Ok(vec![sample_property(8, "Centro")]));
        let listing = listing(api, FetchOrdering::LastResolved);

        let found = block_on(listing.fetch_by_term("casa")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(listing.current_search_term().as_deref(), Some("casa"));
        assert_eq!(listing.items()[0].id, 8);
    }

    #[test]
    fn failed_search_returns_empty_and_flags_error() {
        let api = FakeApi::default();
        *api.search_result.borrow_mut() = Some(Err(ApiError::Parse("bad json".into())));
        let listing = listing(api, FetchOrdering::LastResolved);

        assert_eq!(block_on(listing.fetch_by_term("casa")), Some(Vec::new()));
        assert_eq!(listing.error().as_deref(), Some(SEARCH_ERROR));
    }

    #[test]
    fn reset_after_search_clears_term_and_restores_unfiltered_list() {
        let api = FakeApi::default();
        *api.search_result.borrow_mut() = Some(Ok(vec![sample_property(8, "Centro")]));
        api.all
            .borrow_mut()
            .push_back(Ok(vec![sample_property(1, "Norte"), sample_property(2, "Sul")]));
        let listing = listing(api, FetchOrdering::LastResolved);

        block_on(listing.fetch_by_term("casa"));
        block_on(listing.reset_all());

        assert_eq!(listing.current_search_term(), None);
        let ids: Vec<i64> = listing.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn overlapping_fetches_last_resolved_wins() {
        // Carrera conocida: la primera petición resuelve después y pisa a la segunda
        let api = FakeApi::default();
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        api.pending.borrow_mut().push_back(first_rx);
        api.pending.borrow_mut().push_back(second_rx);
        let listing = listing(api, FetchOrdering::LastResolved);

        block_on(async {
            let first = listing.fetch_all();
            let second = listing.fetch_all();
            let deliver = async {
                second_tx.send(vec![sample_property(2, "Novo")]).unwrap();
                futures::pending!();
                first_tx.send(vec![sample_property(1, "Velho")]).unwrap();
            };
            futures::join!(first, second, deliver);
        });

        let ids: Vec<i64> = listing.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn overlapping_fetches_latest_issued_drops_stale_response() {
        let api = FakeApi::default();
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        api.pending.borrow_mut().push_back(first_rx);
        api.pending.borrow_mut().push_back(second_rx);
        let listing = listing(api, FetchOrdering::LatestIssued);

        block_on(async {
            let first = listing.fetch_all();
            let second = listing.fetch_all();
            let deliver = async {
                second_tx.send(vec![sample_property(2, "Novo")]).unwrap();
                futures::pending!();
                first_tx.send(vec![sample_property(1, "Velho")]).unwrap();
            };
            futures::join!(first, second, deliver);
        });

        let ids: Vec<i64> = listing.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(!listing.is_loading());
    }

    #[test]
    fn cancelled_scope_drops_response() {
        let api = FakeApi::default();
        let (tx, rx) = oneshot::channel();
        api.pending.borrow_mut().push_back(rx);
        let listing = listing(api, FetchOrdering::LastResolved);
        let scope = FetchScope::new();

        block_on(async {
            let fetch = listing.fetch_all_scoped(&scope);
            let unmount = async {
                assert!(listing.is_loading());
                scope.cancel();
                tx.send(vec![sample_property(5, "Centro")]).unwrap();
            };
            futures::join!(fetch, unmount);
        });

        assert!(listing.items().is_empty());
        assert!(!listing.is_loading(), "una respuesta descartada no deja el spinner puesto");
    }

    #[test]
    fn cancelled_older_fetch_leaves_newer_one_loading() {
        let api = FakeApi::default();
        let (old_tx, old_rx) = oneshot::channel();
        let (new_tx, new_rx) = oneshot::channel();
        api.pending.borrow_mut().push_back(old_rx);
        api.pending.borrow_mut().push_back(new_rx);
        let listing = listing(api, FetchOrdering::LastResolved);
        let old_scope = FetchScope::new();

        block_on(async {
            let old = listing.fetch_all_scoped(&old_scope);
            let new = listing.fetch_all();
            let deliver = async {
                old_scope.cancel();
                old_tx.send(vec![sample_property(1, "Velho")]).unwrap();
                futures::pending!();
                assert!(listing.is_loading(), "la petición nueva sigue pendiente");
                new_tx.send(vec![sample_property(2, "Novo")]).unwrap();
            };
            futures::join!(old, new, deliver);
        });

        assert!(!listing.is_loading());
        assert_eq!(listing.items()[0].id, 2);
    }

    #[test]
    fn superseded_search_returns_nothing_to_the_caller() {
        let api = FakeApi::default();
        let (search_tx, search_rx) = oneshot::channel();
        let (all_tx, all_rx) = oneshot::channel();
        *api.search_gate.borrow_mut() = Some(search_rx);
        *api.search_result.borrow_mut() = Some(Ok(vec![sample_property(8, "Centro")]));
        api.pending.borrow_mut().push_back(all_rx);
        let listing = listing(api, FetchOrdering::LatestIssued);

        let (searched, _) = block_on(async {
            let search = listing.fetch_by_term("centro");
            let newer = listing.fetch_all();
            let deliver = async {
                all_tx.send(vec![sample_property(1, "Norte")]).unwrap();
                futures::pending!();
                search_tx.send(()).unwrap();
            };
            let (searched, newer, _) = futures::join!(search, newer, deliver);
            (searched, newer)
        });

        assert_eq!(searched, None);
        assert_eq!(listing.items()[0].id, 1);
    }

    #[test]
    fn set_items_replaces_directly() {
        let listing = listing(FakeApi::default(), FetchOrdering::LastResolved);
        listing.set_items(vec![sample_property(4, "Centro")]);
        assert_eq!(listing.items()[0].id, 4);
    }
}
