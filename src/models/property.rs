use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de inmueble. Los tags desconocidos se conservan en `Outro`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TipoImovel {
    Casa,
    Apartamento,
    Terreno,
    Comercial,
    Rural,
    Outro(String),
}

impl From<String> for TipoImovel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CASA" => TipoImovel::Casa,
            "APARTAMENTO" => TipoImovel::Apartamento,
            "TERRENO" => TipoImovel::Terreno,
            "COMERCIAL" => TipoImovel::Comercial,
            "RURAL" => TipoImovel::Rural,
            _ => TipoImovel::Outro(raw),
        }
    }
}

impl From<TipoImovel> for String {
    fn from(tipo: TipoImovel) -> Self {
        match tipo {
            TipoImovel::Casa => "CASA".to_string(),
            TipoImovel::Apartamento => "APARTAMENTO".to_string(),
            TipoImovel::Terreno => "TERRENO".to_string(),
            TipoImovel::Comercial => "COMERCIAL".to_string(),
            TipoImovel::Rural => "RURAL".to_string(),
            TipoImovel::Outro(raw) => raw,
        }
    }
}

impl Default for TipoImovel {
    fn default() -> Self {
        TipoImovel::Casa
    }
}

/// Inmueble tal como lo devuelve la API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub endereco: String,
    pub bairro: String,
    pub valor: f64,
    #[serde(default)]
    pub foto: String,
    #[serde(default)]
    pub quarto: u32,
    #[serde(default)]
    pub banheiro: u32,
    #[serde(default)]
    pub cozinha: u32,
    #[serde(default)]
    pub sala: u32,
    #[serde(default)]
    pub garagem: u32,
    #[serde(default)]
    pub suite: u32,
    #[serde(default)]
    pub area_servico: u32,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub tipo_imovel: TipoImovel,
    #[serde(default)]
    pub is_arquivado: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub usuario_id: Option<i64>,
}

/// Payload de alta de inmueble (POST /imoveis)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub area: f64,
    pub valor: f64,
    pub endereco: String,
    pub bairro: String,
    pub tipo_imovel: TipoImovel,
    /// Admin responsable
    pub usuario_id: i64,
    pub quarto: u32,
    pub banheiro: u32,
    pub cozinha: u32,
    pub sala: u32,
    pub garagem: u32,
    pub suite: u32,
    pub area_servico: u32,
    pub foto: String,
    pub is_arquivado: bool,
}

impl NewProperty {
    /// Validación local antes de enviar
    pub fn validate(&self) -> Result<(), String> {
        if self.endereco.trim().is_empty() || self.bairro.trim().is_empty() {
            return Err("Endereço e bairro são obrigatórios".to_string());
        }
        if self.valor <= 0.0 || self.area <= 0.0 {
            return Err("Valor e área devem ser positivos".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_property(id: i64, bairro: &str) -> Property {
    Property {
        id,
        endereco: format!("Rua {}, {}", bairro, id),
        bairro: bairro.to_string(),
        valor: 250_000.0 + id as f64,
        foto: String::new(),
        quarto: 2,
        banheiro: 1,
        cozinha: 1,
        sala: 1,
        garagem: 1,
        suite: 0,
        area_servico: 1,
        area: 70.0,
        tipo_imovel: TipoImovel::Apartamento,
        is_arquivado: false,
        created_at: None,
        updated_at: None,
        usuario_id: Some(1),
    }
}
