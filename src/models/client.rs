use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schedule::ImovelResumo;

/// Agendamiento visto desde la ficha del cliente
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteAgendamento {
    pub id: i64,
    pub data: DateTime<Utc>,
    pub confirmado: bool,
    pub imovel: ImovelResumo,
    #[serde(default)]
    pub admin_id: Option<i64>,
}

/// Cliente (vista de administración, GET /admins/clientes)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_arquivado: bool,
    #[serde(default)]
    pub tipo_usuario: String,
    #[serde(default)]
    pub cliente_agendamentos: Vec<ClienteAgendamento>,
}

impl Cliente {
    pub fn pending_count(&self) -> usize {
        self.cliente_agendamentos.iter().filter(|a| !a.confirmado).count()
    }
}

/// Confirma `agendamento_id` dentro de cualquier cliente
pub fn mark_client_schedule_confirmed(clientes: &mut [Cliente], agendamento_id: i64) -> bool {
    let mut changed = false;
    for cliente in clientes.iter_mut() {
        for agendamento in cliente.cliente_agendamentos.iter_mut() {
            if agendamento.id == agendamento_id && !agendamento.confirmado {
                agendamento.confirmado = true;
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente_json() -> &'static str {
        r#"[{
            "id": 4, "nome": "Ana", "email": "ana@x.com", "isArquivado": false,
            "tipoUsuario": "CLIENTE",
            "clienteAgendamentos": [
                {"id": 1, "data": "2030-02-01T10:00:00Z", "confirmado": false, "adminId": 2,
                 "imovel": {"id": 9, "endereco": "Rua C", "bairro": "Norte"}},
                {"id": 2, "data": "2030-02-02T10:00:00Z", "confirmado": true,
                 "imovel": {"id": 9, "endereco": "Rua C", "bairro": "Norte"}}
            ]
        }]"#
    }

    #[test]
    fn nested_confirmation_patch() {
        let mut clientes: Vec<Cliente> = serde_json::from_str(cliente_json()).unwrap();
        assert_eq!(clientes[0].pending_count(), 1);

        assert!(mark_client_schedule_confirmed(&mut clientes, 1));
        assert_eq!(clientes[0].pending_count(), 0);
        assert!(!mark_client_schedule_confirmed(&mut clientes, 1));
    }
}
