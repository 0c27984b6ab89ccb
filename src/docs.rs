// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_metrics,
        handlers::dashboard::get_transactions,
        handlers::dashboard::get_kpi_targets,
        handlers::dashboard::get_overview,

        // --- Reports ---
        handlers::reports::get_summary,
        handlers::reports::get_monthly,
        handlers::reports::get_pivot,
        handlers::reports::get_kpi_analysis,

        // --- Export ---
        handlers::export::export_excel,
        handlers::export::export_csv,
    ),
    components(
        schemas(
            // --- FINANCIAL ---
            models::financial::TransactionKind,
            models::financial::TransactionStatus,
            models::financial::KpiStatus,
            models::financial::KpiTrend,
            models::financial::AnomalySeverity,
            models::financial::FinancialMetrics,
            models::financial::Transaction,
            models::financial::KpiTarget,

            // --- Formas de relatório (pontos de extensão) ---
            models::financial::CashFlowData,
            models::financial::RevenueBreakdown,
            models::financial::CogsBreakdown,
            models::financial::OperatingExpenses,
            models::financial::PlStatement,
            models::financial::AnomalyAlert,

            // --- REPORTS ---
            models::reports::SummaryRow,
            models::reports::MonthlyMetricsRow,
            models::reports::PivotRow,
            models::reports::KpiAnalysisRow,
            models::reports::ExpenseSlice,
            models::reports::DashboardOverview,
        )
    ),
    tags(
        (name = "Dashboard", description = "Métricas, transações e KPIs sintéticos"),
        (name = "Reports", description = "Tabelas agregadas (resumo, mensal, pivot e KPIs)"),
        (name = "Export", description = "Download do workbook XLSX e do CSV")
    )
)]
pub struct ApiDoc;
