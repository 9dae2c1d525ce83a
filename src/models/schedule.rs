use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resumen de inmueble embebido en un agendamiento
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImovelResumo {
    pub id: i64,
    pub endereco: String,
    pub bairro: String,
    #[serde(default)]
    pub foto: Option<String>,
    #[serde(default)]
    pub valor: Option<f64>,
}

/// Cliente o admin embebido
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pessoa {
    pub id: i64,
    pub nome: String,
    pub email: String,
}

/// Visita agendada
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agendamento {
    pub id: i64,
    pub data: DateTime<Utc>,
    pub confirmado: bool,
    #[serde(default)]
    pub imovel_id: Option<i64>,
    #[serde(default)]
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub admin_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub imovel: ImovelResumo,
    #[serde(default)]
    pub cliente: Option<Pessoa>,
    #[serde(default)]
    pub admin: Option<Pessoa>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub data: DateTime<Utc>,
    pub imovel_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub agendamento_id: i64,
}

/// Marca como confirmado el agendamiento `id`. Devuelve si hubo cambio
pub fn mark_confirmed(agendamentos: &mut [Agendamento], id: i64) -> bool {
    match agendamentos.iter_mut().find(|a| a.id == id) {
        Some(agendamento) if !agendamento.confirmado => {
            agendamento.confirmado = true;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
pub(crate) fn sample_agendamento(id: i64, confirmado: bool) -> Agendamento {
    Agendamento {
        id,
        data: "2030-01-10T14:00:00Z".parse().unwrap(),
        confirmado,
        imovel_id: Some(10),
        cliente_id: Some(20),
        admin_id: Some(1),
        created_at: None,
        updated_at: None,
        imovel: ImovelResumo {
            id: 10,
            endereco: "Rua B, 5".to_string(),
            bairro: "Centro".to_string(),
            foto: None,
            valor: Some(300_000.0),
        },
        cliente: None,
        admin: None,
    }
}
