use crate::models::{Agendamento, ConfirmRequest, Credentials, VisitRequest};
use crate::services::{ApiClient, ApiError, Auth};

/// Endpoints de agendamientos de visita
#[allow(async_fn_in_trait)]
pub trait ScheduleApi {
    async fn request_visit(&self, creds: &Credentials, request: &VisitRequest) -> Result<(), ApiError>;
    /// Agendamientos del cliente logueado
    async fn my_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError>;
    /// Agendamientos asignados al admin logueado
    async fn admin_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError>;
    async fn all_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError>;
    async fn confirm_schedule(&self, creds: &Credentials, agendamento_id: i64) -> Result<(), ApiError>;
}

impl ScheduleApi for ApiClient {
    async fn request_visit(&self, creds: &Credentials, request: &VisitRequest) -> Result<(), ApiError> {
        log::info!("📅 [API] Solicitando visita al imóvel {} para {}", request.imovel_id, request.data);
        self.post_unit(&["agendamentos", "solicitar"], request, Auth::Bearer(creds)).await
    }

    async fn my_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError> {
        self.get_json(&["agendamentos", "meus"], Auth::Bearer(creds)).await
    }

    async fn admin_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError> {
        self.get_json(&["agendamentos", "admin"], Auth::Bearer(creds)).await
    }

    async fn all_schedules(&self, creds: &Credentials) -> Result<Vec<Agendamento>, ApiError> {
        self.get_json(&["agendamentos", "todos"], Auth::Bearer(creds)).await
    }

    async fn confirm_schedule(&self, creds: &Credentials, agendamento_id: i64) -> Result<(), ApiError> {
        log::info!("✅ [API] Confirmando agendamento {}", agendamento_id);
        let body = ConfirmRequest { agendamento_id };
        self.post_unit(&["agendamentos", "confirmar"], &body, Auth::Bearer(creds)).await
    }
}
