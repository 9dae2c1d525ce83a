use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContagemAgendamentos {
    pub confirmados: u32,
    pub nao_confirmados: u32,
    pub total: u32,
}

/// Agendamientos por admin (GET /suporte/admins-agendamentos)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminAgendamentos {
    pub id: String,
    pub nome: String,
    pub agendamentos: ContagemAgendamentos,
}

/// Inmuebles por barrio (GET /suporte/imoveis-por-bairro)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BairroCount {
    pub bairro: String,
    pub total_imoveis: u32,
}

/// Porcentaje de cada barrio sobre el total, en el orden recibido
pub fn bairro_shares(counts: &[BairroCount]) -> Vec<(String, f64)> {
    let total: u32 = counts.iter().map(|c| c.total_imoveis).sum();
    counts
        .iter()
        .map(|c| {
            let share = if total == 0 {
                0.0
            } else {
                f64::from(c.total_imoveis) * 100.0 / f64::from(total)
            };
            (c.bairro.clone(), share)
        })
        .collect()
}
