// src/config.rs

use std::env;

use crate::services::{DashboardService, ExportService, ReportService};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub dashboard_service: DashboardService,
    pub report_service: ReportService,
    pub export_service: ExportService,
}

#[derive(Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    // Seed opcional do gerador: fixa o dataset de demonstração.
    // Sem seed, cada requisição sorteia um dataset novo.
    pub rng_seed: Option<u64>,
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppState {
    // Carrega as configurações e monta o gráfico de dependências.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                anyhow::anyhow!("PORT inválida ({raw}): {e}")
            })?,
            Err(_) => 3000,
        };
        let rng_seed = match env::var("RNG_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| {
                anyhow::anyhow!("RNG_SEED inválida ({raw}): {e}")
            })?),
            Err(_) => None,
        };

        if let Some(seed) = rng_seed {
            tracing::info!("🎲 RNG_SEED={} — dataset de demonstração fixado", seed);
        }

        let settings = Settings { host, port, rng_seed };

        // --- Monta o gráfico de dependências ---
        let dashboard_service = DashboardService::new(settings.rng_seed);
        let report_service = ReportService::new();
        let export_service = ExportService::new(report_service.clone());

        Ok(Self {
            settings,
            dashboard_service,
            report_service,
            export_service,
        })
    }
}
