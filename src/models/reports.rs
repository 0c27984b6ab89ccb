// src/models/reports.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::financial::{KpiStatus, KpiTrend};

// 1. Aba "Summary" (pares Métrica/Valor, já renderizados)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    #[schema(example = "Total Revenue")]
    pub metric: String,

    #[schema(example = "$63.42M")]
    pub value: String,
}

// 2. Aba "Monthly Metrics": uma linha por snapshot, valores com 2 casas fixas
// e data no formato curto M/D/YYYY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetricsRow {
    #[schema(example = "8/1/2025")]
    pub date: String,
    pub revenue: String,
    pub expenses: String,
    pub net_income: String,
    pub gross_margin: String,
    pub operating_margin: String,
    pub ebitda: String,
    pub cash_flow: String,
    pub current_ratio: String,
    pub quick_ratio: String,
    pub return_on_assets: String,
    pub return_on_equity: String,
}

// 3. Aba "Pivot Analysis": agregado por categoria, na ordem em que cada
// categoria aparece pela primeira vez na sequência de transações.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PivotRow {
    #[schema(example = "Product Sales")]
    pub category: String,

    pub income: Decimal,
    pub expense: Decimal,

    // net = income - expense
    pub net: Decimal,

    // margin = net / income * 100 (2 casas); 0.00 quando income == 0
    pub margin: Decimal,
}

// 4. Aba "KPI Analysis": fixture + coluna de performance calculada
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiAnalysisRow {
    pub metric: String,
    pub actual: f64,
    pub target: f64,
    pub variance: f64,
    pub status: KpiStatus,
    pub trend: KpiTrend,

    // (actual / target) * 100, renderizado com 2 casas
    #[schema(example = "125.00")]
    pub performance: String,
}

// 5. Resumo dos cards do dashboard (mês corrente vs anterior)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSlice {
    #[schema(example = "Operations")]
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub revenue: f64,

    // Variação percentual da receita vs o mês anterior
    pub revenue_change: f64,

    pub net_income: f64,
    pub profit_margin: f64,
    pub cash_flow: f64,
    pub current_ratio: f64,

    pub expense_breakdown: Vec<ExpenseSlice>,
}
