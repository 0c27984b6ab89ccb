// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    services::dashboard_service::DEFAULT_TRANSACTION_COUNT,
    // Importamos os models para referenciar no Swagger
    models::financial::{FinancialMetrics, KpiTarget, Transaction},
    models::reports::DashboardOverview,
};

#[derive(Debug, Deserialize, Validate)]
pub struct TransactionQuery {
    #[validate(range(min = 1, max = 10000, message = "count deve estar entre 1 e 10000"))]
    pub count: Option<u32>,
}

// GET /api/dashboard/metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    responses(
        (status = 200, description = "12 meses de métricas financeiras, mês mais antigo primeiro", body = Vec<FinancialMetrics>)
    )
)]
pub async fn get_metrics(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let metrics = app_state.dashboard_service.financial_metrics();

    Ok((StatusCode::OK, Json(metrics)))
}

// GET /api/dashboard/transactions
#[utoipa::path(
    get,
    path = "/api/dashboard/transactions",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Lote de transações dos últimos 90 dias, mais recente primeiro", body = Vec<Transaction>),
        (status = 400, description = "Parâmetro count fora do intervalo permitido")
    ),
    params(
        ("count" = Option<u32>, Query, description = "Quantidade de transações (1 a 10000, padrão 500)")
    )
)]
pub async fn get_transactions(
    State(app_state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let count = query
        .count
        .map(|c| c as usize)
        .unwrap_or(DEFAULT_TRANSACTION_COUNT);
    let transactions = app_state.dashboard_service.transactions(count);

    Ok((StatusCode::OK, Json(transactions)))
}

// GET /api/dashboard/kpi-targets
#[utoipa::path(
    get,
    path = "/api/dashboard/kpi-targets",
    tag = "Dashboard",
    responses(
        (status = 200, description = "As 5 metas de KPI de referência", body = Vec<KpiTarget>)
    )
)]
pub async fn get_kpi_targets(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let kpis = app_state.dashboard_service.kpi_targets();

    Ok((StatusCode::OK, Json(kpis)))
}

// GET /api/dashboard/overview
#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Cards do dashboard: mês corrente vs anterior + quebra de despesas", body = DashboardOverview),
        (status = 422, description = "Menos de 2 meses de dados disponíveis")
    )
)]
pub async fn get_overview(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let metrics = app_state.dashboard_service.financial_metrics();
    let overview = app_state.report_service.overview(&metrics)?;

    Ok((StatusCode::OK, Json(overview)))
}
