// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo arma requests y traduce respuestas
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::CONFIG;
use crate::models::Credentials;
use crate::services::ApiError;

/// Cabeceras de autenticación a adjuntar
#[derive(Clone, Copy, Debug)]
pub enum Auth<'a> {
    Public,
    /// `Authorization: Bearer <token>`
    Bearer(&'a Credentials),
    /// Bearer + `X-User-Type` con el rol persistido
    RoleSensitive(&'a Credentials),
}

pub fn auth_headers(auth: Auth<'_>) -> Vec<(&'static str, String)> {
    match auth {
        Auth::Public => Vec::new(),
        Auth::Bearer(creds) => vec![("Authorization", format!("Bearer {}", creds.token))],
        Auth::RoleSensitive(creds) => vec![
            ("Authorization", format!("Bearer {}", creds.token)),
            ("X-User-Type", creds.user_type.clone()),
        ],
    }
}

/// Extrae el mensaje de error del cuerpo (`{"erro": "..."}`)
pub fn extract_api_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["erro", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Construye la URL añadiendo segmentos ya codificados (espacios, acentos, '/')
    pub fn url(&self, segments: &[&str]) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }

    fn with_auth(builder: RequestBuilder, auth: Auth<'_>) -> RequestBuilder {
        auth_headers(auth)
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, &value))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        auth: Auth<'_>,
    ) -> Result<T, ApiError> {
        let url = self.url(segments)?;
        log::debug!("🌐 [API] GET {}", url);

        let response = Self::with_auth(Request::get(&url), auth)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(&response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
        auth: Auth<'_>,
    ) -> Result<T, ApiError> {
        let response = self.post(segments, body, auth).await?;
        read_json(&response).await
    }

    /// POST cuya respuesta solo importa por el status
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
        auth: Auth<'_>,
    ) -> Result<(), ApiError> {
        let response = self.post(segments, body, auth).await?;
        check_status(&response).await
    }

    pub(crate) async fn delete(&self, segments: &[&str], auth: Auth<'_>) -> Result<(), ApiError> {
        let url = self.url(segments)?;
        log::debug!("🌐 [API] DELETE {}", url);

        let response = Self::with_auth(Request::delete(&url), auth)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response).await
    }

    async fn post<B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
        auth: Auth<'_>,
    ) -> Result<Response, ApiError> {
        let url = self.url(segments)?;
        log::debug!("🌐 [API] POST {}", url);

        Self::with_auth(Request::post(&url), auth)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn check_status(response: &Response) -> Result<(), ApiError> {
    let status = response.status();
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized(status));
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let message = extract_api_message(&body).unwrap_or_else(|| response.status_text());
        return Err(ApiError::Status { status, message });
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
