// ============================================================================
// ADMIN VIEWMODEL - Clientes, administradores e inmuebles (panel interno)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::models::client::mark_client_schedule_confirmed;
use crate::models::{Cliente, Credentials, NewProperty, Pessoa, Property};
use crate::services::{AdminApi, ApiClient, PropertyApi, ScheduleApi};
use crate::state::{ListingState, ReactiveState, SessionState};

use super::ActionError;

const CLIENTS_ERROR: &str = "Erro ao carregar os dados dos clientes";
const ADMINS_ERROR: &str = "Não foi possível carregar a lista de administradores";
const CREATE_ERROR: &str = "Erro ao cadastrar imóvel. Verifique os dados e tente novamente.";
const DELETE_ERROR: &str = "Erro ao excluir o imóvel";
const PROPERTY_ERROR: &str = "Erro ao carregar o imóvel";
const CONFIRM_ERROR: &str = "Erro ao confirmar agendamento";

pub struct AdminViewModel<A: AdminApi + ScheduleApi + PropertyApi = ApiClient> {
    api: Rc<A>,
    session: SessionState,
    listing: ListingState<A>,
    clients: ReactiveState<Vec<Cliente>>,
    confirming: Rc<RefCell<HashSet<i64>>>,
}

impl<A: AdminApi + ScheduleApi + PropertyApi> AdminViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState, listing: ListingState<A>) -> Self {
        Self {
            api,
            session,
            listing,
            clients: ReactiveState::new(Vec::new()),
            confirming: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    pub fn held_clients(&self) -> Vec<Cliente> {
        self.clients.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.clients.subscribe(callback);
    }

    fn credentials(&self) -> Result<Credentials, ActionError> {
        self.session.credentials().ok_or(ActionError::NotAuthenticated)
    }

    /// GET /admins/clientes, con sus agendamientos anidados
    pub async fn clients(&self) -> Result<Vec<Cliente>, ActionError> {
        let creds = self.credentials()?;
        let list = self
            .api
            .list_clients(&creds)
            .await
            .map_err(|e| ActionError::from_api(e, CLIENTS_ERROR))?;
        log::info!("👥 [ADMIN] {} clientes", list.len());
        self.clients.set(list.clone());
        Ok(list)
    }

    /// Confirma un agendamiento desde la ficha de un cliente.
    /// `Ok(false)` si ya había una confirmación en curso para ese id.
    pub async fn confirm_client_schedule(&self, agendamento_id: i64) -> Result<bool, ActionError> {
        let creds = self.credentials()?;
        if !self.confirming.borrow_mut().insert(agendamento_id) {
            return Ok(false);
        }

        let result = self.api.confirm_schedule(&creds, agendamento_id).await;
        self.confirming.borrow_mut().remove(&agendamento_id);
        result.map_err(|e| ActionError::from_api(e, CONFIRM_ERROR))?;

        self.clients.update(|list| {
            mark_client_schedule_confirmed(list, agendamento_id);
        });
        log::info!("✅ [ADMIN] Agendamento {} confirmado", agendamento_id);
        Ok(true)
    }

    /// Administradores a los que asignar un inmueble nuevo
    pub async fn list_admins(&self) -> Result<Vec<Pessoa>, ActionError> {
        let creds = self.credentials()?;
        self.api
            .list_admins(&creds)
            .await
            .map_err(|e| ActionError::from_api(e, ADMINS_ERROR))
    }

    pub async fn create_property(&self, payload: NewProperty) -> Result<(), ActionError> {
        payload.validate().map_err(ActionError::Invalid)?;
        let creds = self.credentials()?;

        self.api
            .create_property(&creds, &payload)
            .await
            .map_err(|e| ActionError::from_api(e, CREATE_ERROR))?;
        log::info!("🏠 [ADMIN] Imóvel cadastrado em {}", payload.bairro);
        Ok(())
    }

    /// Solo ADMIN. Tras el OK se quita del listado sin recargarlo.
    pub async fn delete_property(&self, id: i64) -> Result<(), ActionError> {
        if !self.session.is_admin() {
            log::warn!("⛔ [ADMIN] Apenas administradores podem excluir imóveis");
            return Err(ActionError::Forbidden);
        }
        let creds = self.credentials()?;

        self.api
            .delete_property(&creds, id)
            .await
            .map_err(|e| ActionError::from_api(e, DELETE_ERROR))?;

        let remaining: Vec<Property> = self.listing.items().into_iter().filter(|p| p.id != id).collect();
        self.listing.set_items(remaining);
        log::info!("🗑️ [ADMIN] Imóvel {} excluído", id);
        Ok(())
    }

    /// Ficha pública de un inmueble
    pub async fn property(&self, id: i64) -> Result<Property, ActionError> {
        self.api
            .fetch_property(id)
            .await
            .map_err(|e| ActionError::from_api(e, PROPERTY_ERROR))
    }
}
