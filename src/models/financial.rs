// src/models/financial.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,    // Entrada
    Expense,   // Saída
    Asset,     // Ativo
    Liability, // Passivo
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "INCOME"),
            TransactionKind::Expense => write!(f, "EXPENSE"),
            TransactionKind::Asset => write!(f, "ASSET"),
            TransactionKind::Liability => write!(f, "LIABILITY"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,   // Aguardando liquidação
    Completed, // Liquidada
    Cancelled, // Cancelada
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "PENDING"),
            TransactionStatus::Completed => write!(f, "COMPLETED"),
            TransactionStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KpiStatus {
    Above,
    OnTarget,
    Below,
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpiStatus::Above => write!(f, "ABOVE"),
            KpiStatus::OnTarget => write!(f, "ON_TARGET"),
            KpiStatus::Below => write!(f, "BELOW"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KpiTrend {
    Up,
    Stable,
    Down,
}

impl std::fmt::Display for KpiTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpiTrend::Up => write!(f, "UP"),
            KpiTrend::Stable => write!(f, "STABLE"),
            KpiTrend::Down => write!(f, "DOWN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
    Critical,
}

// --- Structs ---

// Um snapshot por mês-calendário. `net_income` é sempre revenue - expenses
// no momento da geração; a sequência retorna em ordem cronológica crescente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    #[schema(value_type = String, format = Date, example = "2025-08-01")]
    pub date: NaiveDate,

    #[schema(example = 5234000.50)]
    pub revenue: f64,

    #[schema(example = 3912000.25)]
    pub expenses: f64,

    pub net_income: f64,
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub ebitda: f64,
    pub cash_flow: f64,
    pub working_capital: f64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub debt_to_equity: f64,
    pub return_on_assets: f64,
    pub return_on_equity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[schema(example = "TXN-1042")]
    pub id: String,

    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[schema(example = "Product Sales")]
    pub category: String,

    #[schema(example = "Product Sales-Sub2")]
    pub subcategory: String,

    #[schema(example = "45000")]
    pub amount: Decimal,

    pub description: String,

    #[schema(example = "ACC-7")]
    pub account: String,

    #[schema(example = "Sales")]
    pub department: String,

    pub status: TransactionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiTarget {
    #[schema(example = "Revenue Growth")]
    pub metric: String,

    #[schema(example = 12.5)]
    pub actual: f64,

    #[schema(example = 10.0)]
    pub target: f64,

    // Sinal significativo: positivo = acima da meta
    pub variance: f64,

    pub status: KpiStatus,
    pub trend: KpiTrend,
}

// --- Formas de relatório (pontos de extensão) ---
// Declaradas para a camada de apresentação; o gerador ainda não as popula.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowData {
    pub period: String,
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
    pub net_cash_flow: f64,
    pub beginning_cash: f64,
    pub ending_cash: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub product_sales: f64,
    pub service_sales: f64,
    pub other_income: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CogsBreakdown {
    pub materials: f64,
    pub labor: f64,
    pub overhead: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatingExpenses {
    pub sales: f64,
    pub marketing: f64,
    pub administrative: f64,
    pub rd: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlStatement {
    pub period: String,
    pub revenue: RevenueBreakdown,
    pub cogs: CogsBreakdown,
    pub operating_expenses: OperatingExpenses,
    pub ebitda: f64,
    pub depreciation: f64,
    pub interest_expense: f64,
    pub tax_expense: f64,
    pub net_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyAlert {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    pub date: DateTime<Utc>,
    pub metric: String,
    pub expected_value: f64,
    pub actual_value: f64,
    pub deviation: f64,
    pub severity: AnomalySeverity,
    pub description: String,
}
