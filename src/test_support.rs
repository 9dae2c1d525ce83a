// ============================================================================
// TEST SUPPORT - Backend falso para tests nativos (sin navegador)
// ============================================================================
// Implementa todos los traits de servicios. Las respuestas se programan desde
// el test y las llamadas quedan registradas para verificarlas después.
// ============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::models::auth::{RecoveryRequest, RegisterRequest, ValidateRecoveryRequest};
use crate::models::{
    AdminAgendamentos, Agendamento, BairroCount, Cliente, Credentials, LoginRequest, LoginResponse, NewProperty,
    Pessoa, Property, VisitRequest,
};
use crate::services::{AdminApi, ApiError, AuthApi, PropertyApi, ScheduleApi, SupportApi};

#[derive(Default)]
pub(crate) struct FakeApi {
    // Listado
    pub all: RefCell<VecDeque<Result<Vec<Property>, ApiError>>>,
    pub pending: RefCell<VecDeque<oneshot::Receiver<Vec<Property>>>>,
    pub searches: RefCell<Vec<String>>,
    pub search_result: RefCell<Option<Result<Vec<Property>, ApiError>>>,
    pub search_gate: RefCell<Option<oneshot::Receiver<()>>>,

    // Auth
    pub login_result: RefCell<Option<Result<LoginResponse, ApiError>>>,
    pub logins: RefCell<Vec<LoginRequest>>,
    pub registrations: RefCell<Vec<RegisterRequest>>,
    pub recoveries: RefCell<Vec<RecoveryRequest>>,
    pub validations: RefCell<Vec<ValidateRecoveryRequest>>,

    // Agendamientos
    pub schedules: RefCell<Vec<Agendamento>>,
    pub visits: RefCell<Vec<VisitRequest>>,
    pub confirmations: RefCell<Vec<i64>>,
    pub confirm_gate: RefCell<Option<oneshot::Receiver<()>>>,

    // Admin / soporte
    pub properties: RefCell<Vec<Property>>,
    pub created: RefCell<Vec<NewProperty>>,
    pub deleted: RefCell<Vec<i64>>,
    pub clients: RefCell<Vec<Cliente>>,
    pub admins: RefCell<Vec<Pessoa>>,
    pub admin_stats: RefCell<Vec<AdminAgendamentos>>,
    pub bairros: RefCell<Vec<BairroCount>>,

    /// Si está puesto, todo endpoint salvo el listado falla con este error
    pub fail_with: RefCell<Option<ApiError>>,
    /// Credenciales vistas por endpoints autenticados
    pub seen_credentials: RefCell<Vec<Credentials>>,
}

impl FakeApi {
    pub fn failing(error: ApiError) -> Self {
        let api = Self::default();
        *api.fail_with.borrow_mut() = Some(error);
        api
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.fail_with.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn authed(&self, creds: &Credentials) -> Result<(), ApiError> {
        self.seen_credentials.borrow_mut().push(creds.clone());
        self.check()
    }
}

impl PropertyApi for FakeApi {
    async fn fetch_properties(&self) -> Result<Vec<Property>, ApiError> {
        let pending = self.pending.borrow_mut().pop_front();
        if let Some(rx) = pending {
            return rx.await.map_err(|_| ApiError::Network("canceled".into()));
        }
        self.all.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn search_properties(&self, term: &str) -> Result<Vec<Property>, ApiError> {
        self.searches.borrow_mut().push(term.to_string());
        let gate = self.search_gate.borrow_mut().take();
        if let Some(rx) = gate {
            rx.await.map_err(|_| ApiError::Network("canceled".into()))?;
        }
        self.search_result.borrow().clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.logins.borrow_mut().push(request.clone());
        self.login_result
            .borrow()
            .clone()
            .unwrap_or(Err(ApiError::Unauthorized(401)))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.registrations.borrow_mut().push(request.clone());
        self.check()
    }

    async fn request_recovery(&self, request: &RecoveryRequest) -> Result<(), ApiError> {
        self.recoveries.borrow_mut().push(request.clone());
        self.check()
    }

    async fn validate_recovery(&self, request: &ValidateRecoveryRequest) -> Result<(), ApiError> {
        self.validations.borrow_mut().push(request.clone());
        self.check()
    }
}

impl ScheduleApi for FakeApi {
    async fn request_visit(&self, creds: &Credentials, request: &VisitRequest) -> Result<(), ApiError> {
        self.authed(creds)?;
        self.visits.borrow_mut().push(request.clone());
        Ok(())
    }

    async fn my_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError> {
        self.authed(creds)?;
        Ok(self.schedules.borrow().clone())
    }

    async fn admin_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError> {
        self.authed(creds)?;
        Ok(self.schedules.borrow().clone())
    }

    async fn all_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError> {
        self.authed(creds)?;
        Ok(self.schedules.borrow().clone())
    }

    async fn confirm_schedule(&self, creds: &Credentials, agendamento_id: i64) -> Result<(), ApiError> {
        self.authed(creds)?;
        self.confirmations.borrow_mut().push(agendamento_id);
        let gate = self.confirm_gate.borrow_mut().take();
        if let Some(rx) = gate {
            rx.await.map_err(|_| ApiError::Network("canceled".into()))?;
        }
        Ok(())
    }
}

impl AdminApi for FakeApi {
    async fn fetch_property(&self, id: i64) -> Result<Property, ApiError> {
        self.check()?;
        self.properties
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: "Imóvel não encontrado".into(),
            })
    }

    async fn create_property(&self, creds: &Credentials, payload: &NewProperty) -> Result<(), ApiError> {
        self.authed(creds)?;
        self.created.borrow_mut().push(payload.clone());
        Ok(())
    }

    async fn delete_property(&self, creds: &Credentials, id: i64) -> Result<(), ApiError> {
        self.authed(creds)?;
        self.deleted.borrow_mut().push(id);
        Ok(())
    }

    async fn list_clients(&self, creds: &Credentials) -> Result<Vec<Cliente>, ApiError> {
        self.authed(creds)?;
        Ok(self.clients.borrow().clone())
    }

    async fn list_admins(&self, creds: &Credentials) -> Result<Vec<Pessoa>, ApiError> {
        self.authed(creds)?;
        Ok(self.admins.borrow().clone())
    }
}

impl SupportApi for FakeApi {
    async fn admins_schedules(&self, creds: &Credentials) -> Result<Vec<AdminAgendamentos>, ApiError> {
        self.authed(creds)?;
        Ok(self.admin_stats.borrow().clone())
    }

    async fn properties_by_neighbourhood(&self, creds: &Credentials) -> Result<Vec<BairroCount>, ApiError> {
        self.authed(creds)?;
        Ok(self.bairros.borrow().clone())
    }
}
