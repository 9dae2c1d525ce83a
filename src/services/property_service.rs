use crate::models::{Cliente, Credentials, NewProperty, Pessoa, Property};
use crate::services::{ApiClient, ApiError, Auth};

/// Endpoints del listado público de inmuebles
#[allow(async_fn_in_trait)]
pub trait PropertyApi {
    /// GET /imoveis
    async fn fetch_properties(&self) -> Result<Vec<Property>, ApiError>;
    /// GET /imoveis/pesquisa/{termo}
    async fn search_properties(&self, term: &str) -> Result<Vec<Property>, ApiError>;
}

/// Endpoints de gestión de inmuebles y usuarios (ADMIN/SUPORTE)
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    async fn fetch_property(&self, id: i64) -> Result<Property, ApiError>;
    async fn create_property(&self, creds: &Credentials, payload: &NewProperty) -> Result<(), ApiError>;
    async fn delete_property(&self, creds: &Credentials, id: i64) -> Result<(), ApiError>;
    async fn list_clients(&self, creds: &Credentials) -> Result<Vec<Cliente>, ApiError>;
    async fn list_admins(&self, creds: &Credentials) -> Result<Vec<Pessoa>, ApiError>;
}

impl PropertyApi for ApiClient {
    async fn fetch_properties(&self) -> Result<Vec<Property>, ApiError> {
        let properties: Vec<Property> = self.get_json(&["imoveis"], Auth::Public).await?;
        log::info!("🏠 [API] {} imóveis recibidos", properties.len());
        Ok(properties)
    }

    async fn search_properties(&self, term: &str) -> Result<Vec<Property>, ApiError> {
        log::info!("🔍 [API] Buscando imóveis por '{}'", term);
        self.get_json(&["imoveis", "pesquisa", term], Auth::Public).await
    }
}

impl AdminApi for ApiClient {
    async fn fetch_property(&self, id: i64) -> Result<Property, ApiError> {
        self.get_json(&["imoveis", &id.to_string()], Auth::Public).await
    }

    async fn create_property(&self, creds: &Credentials, payload: &NewProperty) -> Result<(), ApiError> {
        log::info!("📝 [API] Cadastrando imóvel en {}", payload.bairro);
        self.post_unit(&["imoveis"], payload, Auth::Bearer(creds)).await
    }

    async fn delete_property(&self, creds: &Credentials, id: i64) -> Result<(), ApiError> {
        log::info!("🗑️ [API] Eliminando imóvel {}", id);
        self.delete(&["imoveis", &id.to_string()], Auth::Bearer(creds)).await
    }

    async fn list_clients(&self, creds: &Credentials) -> Result<Vec<Cliente>, ApiError> {
        self.get_json(&["admins", "clientes"], Auth::Bearer(creds)).await
    }

    async fn list_admins(&self, creds: &Credentials) -> Result<Vec<Pessoa>, ApiError> {
        self.get_json(&["suporte", "listar-admins"], Auth::Bearer(creds)).await
    }
}
