//src/main.rs

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod data;
mod docs;
mod handlers;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    // Rotas do dashboard (coleções geradas + cards)
    let dashboard_routes = Router::new()
        .route("/metrics", get(handlers::dashboard::get_metrics))
        .route("/transactions", get(handlers::dashboard::get_transactions))
        .route("/kpi-targets", get(handlers::dashboard::get_kpi_targets))
        .route("/overview", get(handlers::dashboard::get_overview));

    // Rotas das tabelas agregadas
    let report_routes = Router::new()
        .route("/summary", get(handlers::reports::get_summary))
        .route("/monthly", get(handlers::reports::get_monthly))
        .route("/pivot", get(handlers::reports::get_pivot))
        .route("/kpi-analysis", get(handlers::reports::get_kpi_analysis));

    // Rotas de download (XLSX e CSV)
    let export_routes = Router::new()
        .route("/excel", get(handlers::export::export_excel))
        .route("/csv", get(handlers::export::export_csv));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/reports", report_routes)
        .nest("/api/export", export_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state.clone());

    // Inicia o servidor
    let addr = app_state.settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
