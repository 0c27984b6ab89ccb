// src/handlers/reports.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    common::error::AppError,
    config::AppState,
    services::dashboard_service::DEFAULT_TRANSACTION_COUNT,
    // Importamos os models para referenciar no Swagger
    models::reports::{KpiAnalysisRow, MonthlyMetricsRow, PivotRow, SummaryRow},
};

// GET /api/reports/summary
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    tag = "Reports",
    responses(
        (status = 200, description = "Resumo do período: totais, margens e métricas do mês corrente", body = Vec<SummaryRow>),
        (status = 422, description = "Menos de 2 meses de dados disponíveis")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let metrics = app_state.dashboard_service.financial_metrics();
    let rows = app_state
        .report_service
        .summary_rows(&metrics, Utc::now().date_naive())?;

    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/reports/monthly
#[utoipa::path(
    get,
    path = "/api/reports/monthly",
    tag = "Reports",
    responses(
        (status = 200, description = "Tabela mensal: uma linha por snapshot, valores com 2 casas fixas", body = Vec<MonthlyMetricsRow>)
    )
)]
pub async fn get_monthly(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let metrics = app_state.dashboard_service.financial_metrics();
    let rows = app_state.report_service.monthly_rows(&metrics);

    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/reports/pivot
#[utoipa::path(
    get,
    path = "/api/reports/pivot",
    tag = "Reports",
    responses(
        (status = 200, description = "Pivot por categoria: income, expense, net e margem", body = Vec<PivotRow>)
    )
)]
pub async fn get_pivot(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let transactions = app_state
        .dashboard_service
        .transactions(DEFAULT_TRANSACTION_COUNT);
    let rows = app_state.report_service.pivot_rows(&transactions);

    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/reports/kpi-analysis
#[utoipa::path(
    get,
    path = "/api/reports/kpi-analysis",
    tag = "Reports",
    responses(
        (status = 200, description = "Metas de KPI com a coluna de performance calculada", body = Vec<KpiAnalysisRow>)
    )
)]
pub async fn get_kpi_analysis(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let kpis = app_state.dashboard_service.kpi_targets();
    let rows = app_state.report_service.kpi_rows(&kpis);

    Ok((StatusCode::OK, Json(rows)))
}
