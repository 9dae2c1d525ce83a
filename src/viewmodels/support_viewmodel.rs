// ============================================================================
// SUPPORT VIEWMODEL - Estadísticas del dashboard de soporte
// ============================================================================
// Endpoints sensibles al rol: se niegan en local si la sesión no es SUPORTE
// antes de gastar una petición.
// ============================================================================

use std::rc::Rc;

use crate::models::stats::bairro_shares;
use crate::models::{AdminAgendamentos, BairroCount, Credentials};
use crate::services::{ApiClient, SupportApi};
use crate::state::SessionState;

use super::ActionError;

const ADMINS_SCHEDULES_ERROR: &str = "Falha ao buscar dados de agendamentos por admin";
const BAIRROS_ERROR: &str = "Falha ao buscar dados de imóveis por bairro";

pub struct SupportViewModel<A: SupportApi = ApiClient> {
    api: Rc<A>,
    session: SessionState,
}

impl<A: SupportApi> SupportViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    fn credentials(&self) -> Result<Credentials, ActionError> {
        if !self.session.is_suporte() {
            log::warn!("⛔ [SUPPORT] Sessão sem perfil SUPORTE");
            return Err(ActionError::Forbidden);
        }
        self.session.credentials().ok_or(ActionError::Forbidden)
    }

    /// Confirmados / no confirmados por administrador
    pub async fn admins_schedules(&self) -> Result<Vec<AdminAgendamentos>, ActionError> {
        let creds = self.credentials()?;
        self.api
            .admins_schedules(&creds)
            .await
            .map_err(|e| ActionError::from_api(e, ADMINS_SCHEDULES_ERROR))
    }

    pub async fn properties_by_neighbourhood(&self) -> Result<Vec<BairroCount>, ActionError> {
        let creds = self.credentials()?;
        self.api
            .properties_by_neighbourhood(&creds)
            .await
            .map_err(|e| ActionError::from_api(e, BAIRROS_ERROR))
    }

    /// Porcentaje de inmuebles por barrio, para el gráfico de tarta
    pub async fn neighbourhood_shares(&self) -> Result<Vec<(String, f64)>, ActionError> {
        let counts = self.properties_by_neighbourhood().await?;
        Ok(bairro_shares(&counts))
    }
}
