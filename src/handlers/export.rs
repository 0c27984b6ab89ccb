// src/handlers/export.rs

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    common::error::AppError,
    config::AppState,
    services::dashboard_service::DEFAULT_TRANSACTION_COUNT,
    services::export_service::CSV_FILE_NAME,
};

const DEFAULT_BASE_NAME: &str = "financial-report";

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub file_name: Option<String>,
}

// GET /api/export/excel
#[utoipa::path(
    get,
    path = "/api/export/excel",
    tag = "Export",
    responses(
        (status = 200, description = "Workbook XLSX com as abas Summary, Monthly Metrics, Transactions, KPI Analysis e Pivot Analysis (download)"),
        (status = 500, description = "Falha na serialização da planilha")
    ),
    params(
        ("file_name" = Option<String>, Query, description = "Base do nome do arquivo (padrão: financial-report)")
    )
)]
pub async fn export_excel(
    State(app_state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let metrics = app_state.dashboard_service.financial_metrics();
    let transactions = app_state
        .dashboard_service
        .transactions(DEFAULT_TRANSACTION_COUNT);
    let kpis = app_state.dashboard_service.kpi_targets();

    let today = Utc::now().date_naive();
    let bytes = app_state
        .export_service
        .build_workbook(&metrics, &transactions, &kpis, today)?;

    let base_name = query.file_name.as_deref().unwrap_or(DEFAULT_BASE_NAME);
    let file_name = app_state.export_service.workbook_file_name(base_name, today);

    tracing::info!("📄 Workbook exportado: {} ({} bytes)", file_name, bytes.len());

    // Configura os headers para o cliente baixar a planilha
    let headers = [
        (
            header::CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ),
    ];

    Ok((headers, bytes).into_response())
}

// GET /api/export/csv
#[utoipa::path(
    get,
    path = "/api/export/csv",
    tag = "Export",
    responses(
        (status = 200, description = "CSV de 4 colunas (Date, Revenue, Expenses, Net Income) com a série mensal (download)")
    )
)]
pub async fn export_csv(State(app_state): State<AppState>) -> Result<Response, AppError> {
    let metrics = app_state.dashboard_service.financial_metrics();
    let csv = app_state.export_service.build_csv(&metrics);

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
        ),
    ];

    Ok((headers, csv).into_response())
}
