// src/services/dashboard_service.rs
//
// A fonte de dados do dashboard. Não há banco: cada chamada gera um
// dataset sintético novo. Com RNG_SEED configurada o dataset é
// reproduzível; sem seed, cada requisição sorteia do zero. Nenhum
// estado mutável é compartilhado entre chamadas concorrentes.

use chrono::Utc;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    data::generator,
    models::financial::{FinancialMetrics, KpiTarget, Transaction},
};

// Tamanho do lote de transações usado pelos relatórios e exports
pub const DEFAULT_TRANSACTION_COUNT: usize = 500;

#[derive(Clone)]
pub struct DashboardService {
    rng_seed: Option<u64>,
}

impl DashboardService {
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self { rng_seed }
    }

    fn rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    /// 12 meses de métricas terminando no mês corrente, em ordem crescente.
    pub fn financial_metrics(&self) -> Vec<FinancialMetrics> {
        generator::generate_financial_metrics(&mut self.rng(), Utc::now().date_naive())
    }

    /// Lote de transações dos últimos 90 dias, mais recente primeiro.
    pub fn transactions(&self, count: usize) -> Vec<Transaction> {
        generator::generate_transactions(&mut self.rng(), Utc::now(), count)
    }

    /// Fixture das metas de KPI.
    pub fn kpi_targets(&self) -> Vec<KpiTarget> {
        generator::generate_kpi_targets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_service_is_reproducible() {
        let service = DashboardService::new(Some(42));

        let a = service.financial_metrics();
        let b = service.financial_metrics();

        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn transactions_honor_requested_count() {
        let service = DashboardService::new(Some(42));

        assert_eq!(service.transactions(100).len(), 100);
        assert_eq!(
            service.transactions(DEFAULT_TRANSACTION_COUNT).len(),
            DEFAULT_TRANSACTION_COUNT
        );
    }
}
