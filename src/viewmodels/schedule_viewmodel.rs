// ============================================================================
// SCHEDULE VIEWMODEL - Agendamientos de visita (cliente y admin)
// ============================================================================
// Confirmación optimista: tras el OK del backend se marca `confirmado` en
// todas las colecciones retenidas, sin volver a pedirlas.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::models::schedule::mark_confirmed;
use crate::models::{Agendamento, Credentials, VisitRequest};
use crate::services::{ApiClient, ScheduleApi};
use crate::state::{ReactiveState, SessionState};

use super::ActionError;

const VISIT_ERROR: &str = "Erro ao agendar visita";
const MY_SCHEDULES_ERROR: &str = "Erro ao carregar os seus agendamentos";
const ADMIN_SCHEDULES_ERROR: &str = "Erro ao carregar os dados dos agendamentos";
const ALL_SCHEDULES_ERROR: &str = "Erro ao carregar todos os agendamentos";
const CONFIRM_ERROR: &str = "Erro ao confirmar agendamento";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleSnapshot {
    /// Los del cliente logueado
    pub mine: Vec<Agendamento>,
    /// Los asignados al admin logueado
    pub assigned: Vec<Agendamento>,
    pub all: Vec<Agendamento>,
}

pub struct ScheduleViewModel<A: ScheduleApi = ApiClient> {
    api: Rc<A>,
    session: SessionState,
    snapshot: ReactiveState<ScheduleSnapshot>,
    confirming: Rc<RefCell<HashSet<i64>>>,
}

impl<A: ScheduleApi> ScheduleViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self {
            api,
            session,
            snapshot: ReactiveState::new(ScheduleSnapshot::default()),
            confirming: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        self.snapshot.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.snapshot.subscribe(callback);
    }

    pub fn is_confirming(&self, id: i64) -> bool {
        self.confirming.borrow().contains(&id)
    }

    fn credentials(&self) -> Result<Credentials, ActionError> {
        self.session.credentials().ok_or(ActionError::NotAuthenticated)
    }

    /// Solicita una visita. Fechas pasadas se rechazan sin llamar a la red.
    pub async fn request_visit(&self, imovel_id: i64, when: DateTime<Utc>) -> Result<(), ActionError> {
        if when < Utc::now() {
            return Err(ActionError::Invalid(
                "Por favor, selecione uma data e horário futuros".into(),
            ));
        }
        let creds = self.credentials()?;

        let request = VisitRequest { data: when, imovel_id };
        self.api
            .request_visit(&creds, &request)
            .await
            .map_err(|e| ActionError::from_api(e, VISIT_ERROR))?;
        log::info!("📅 [SCHEDULE] Visita agendada: imóvel {} em {}", imovel_id, when);
        Ok(())
    }

    pub async fn my_schedules(&self) -> Result<Vec<Agendamento>, ActionError> {
        let creds = self.credentials()?;
        let list = self
            .api
            .my_schedules(&creds)
            .await
            .map_err(|e| ActionError::from_api(e, MY_SCHEDULES_ERROR))?;
        self.snapshot.update(|s| s.mine = list.clone());
        Ok(list)
    }

    pub async fn admin_schedules(&self) -> Result<Vec<Agendamento>, ActionError> {
        let creds = self.credentials()?;
        let list = self
            .api
            .admin_schedules(&creds)
            .await
            .map_err(|e| ActionError::from_api(e, ADMIN_SCHEDULES_ERROR))?;
        self.snapshot.update(|s| s.assigned = list.clone());
        Ok(list)
    }

    pub async fn all_schedules(&self) -> Result<Vec<Agendamento>, ActionError> {
        let creds = self.credentials()?;
        let list = self
            .api
            .all_schedules(&creds)
            .await
            .map_err(|e| ActionError::from_api(e, ALL_SCHEDULES_ERROR))?;
        self.snapshot.update(|s| s.all = list.clone());
        Ok(list)
    }

    /// Confirma un agendamiento. Devuelve `false` si ya había una
    /// confirmación en curso para el mismo id (la segunda se ignora).
    pub async fn confirm(&self, id: i64) -> Result<bool, ActionError> {
        let creds = self.credentials()?;
        if !self.confirming.borrow_mut().insert(id) {
            log::debug!("⏳ [SCHEDULE] Confirmação de {} já em andamento", id);
            return Ok(false);
        }

        let result = self.api.confirm_schedule(&creds, id).await;
        self.confirming.borrow_mut().remove(&id);
        result.map_err(|e| ActionError::from_api(e, CONFIRM_ERROR))?;

        self.snapshot.update(|s| {
            mark_confirmed(&mut s.mine, id);
            mark_confirmed(&mut s.assigned, id);
            mark_confirmed(&mut s.all, id);
        });
        log::info!("✅ [SCHEDULE] Agendamento {} confirmado", id);
        Ok(true)
    }
}
