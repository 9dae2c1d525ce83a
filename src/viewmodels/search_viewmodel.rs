// ============================================================================
// SEARCH VIEWMODEL - Caja de búsqueda de la cabecera
// ============================================================================

use crate::services::{ApiClient, PropertyApi};
use crate::state::ListingState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Término por debajo del mínimo: no se llamó a la red
    TooShort,
    /// Sin coincidencias: se volvió a cargar el listado completo
    NoResults,
    Found(usize),
    /// La respuesta se descartó por una petición más nueva: no se toca nada
    Superseded,
}

pub struct SearchViewModel<A: PropertyApi = ApiClient> {
    listing: ListingState<A>,
    min_len: usize,
}

impl<A: PropertyApi> SearchViewModel<A> {
    pub fn new(listing: ListingState<A>, min_len: usize) -> Self {
        Self { listing, min_len }
    }

    /// El término se manda tal cual, sin recortar espacios.
    pub async fn search(&self, term: &str) -> SearchOutcome {
        if term.chars().count() < self.min_len {
            log::debug!("🔍 [SEARCH] '{}' es demasiado corto (mín. {})", term, self.min_len);
            return SearchOutcome::TooShort;
        }

        match self.listing.fetch_by_term(term).await {
            None => {
                log::debug!("🔍 [SEARCH] Respuesta para '{}' descartada", term);
                SearchOutcome::Superseded
            }
            Some(found) if found.is_empty() => {
                log::info!("🔍 [SEARCH] Sin resultados para '{}', recargando listado", term);
                self.listing.fetch_all().await;
                SearchOutcome::NoResults
            }
            Some(found) => SearchOutcome::Found(found.len()),
        }
    }

    /// Vacía la búsqueda y recarga el listado por defecto
    pub async fn clear(&self) {
        self.listing.reset_all().await;
    }
}
