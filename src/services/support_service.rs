use crate::models::{AdminAgendamentos, BairroCount, Credentials};
use crate::services::{ApiClient, ApiError, Auth};

/// Estadísticas del panel de soporte (cabecera `X-User-Type` obligatoria)
#[allow(async_fn_in_trait)]
pub trait SupportApi {
    async fn admins_schedules(&self, creds: &Credentials) -> Result<Vec<AdminAgendamentos>, ApiError>;
    async fn properties_by_neighbourhood(&self, creds: &Credentials) -> Result<Vec<BairroCount>, ApiError>;
}

impl SupportApi for ApiClient {
    async fn admins_schedules(&self, creds: &Credentials) -> Result<Vec<AdminAgendamentos>, ApiError> {
        self.get_json(&["suporte", "admins-agendamentos"], Auth::RoleSensitive(creds)).await
    }

    async fn properties_by_neighbourhood(&self, creds: &Credentials) -> Result<Vec<BairroCount>, ApiError> {
        self.get_json(&["suporte", "imoveis-por-bairro"], Auth::RoleSensitive(creds)).await
    }
}
