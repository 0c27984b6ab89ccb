// src/data/generator.rs
//
// Gerador de dados financeiros sintéticos. Todas as funções são puras:
// recebem o RNG e a data de referência como argumentos, nunca falham e
// não tocam em I/O. O chamador decide a seed (testes fixam, produção
// pode usar entropia).

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::models::financial::{
    FinancialMetrics, KpiStatus, KpiTarget, KpiTrend, Transaction, TransactionKind,
    TransactionStatus,
};

// Receita base mensal: $5M
const BASE_REVENUE: f64 = 5_000_000.0;

// Janela das transações: últimos 90 dias
const TRANSACTION_WINDOW_SECS: i64 = 90 * 24 * 60 * 60;

pub const INCOME_CATEGORIES: [&str; 4] = [
    "Product Sales",
    "Service Revenue",
    "Subscriptions",
    "Licensing",
];

pub const EXPENSE_CATEGORIES: [&str; 5] = [
    "Salaries",
    "Marketing",
    "Operations",
    "R&D",
    "Infrastructure",
];

const DEPARTMENTS: [&str; 4] = ["Sales", "Marketing", "Engineering", "Operations"];

// Primeiro dia do mês `months_back` meses antes de `base`.
fn month_start(base: NaiveDate, months_back: u32) -> NaiveDate {
    let total = base.year() * 12 + base.month0() as i32 - months_back as i32;
    let (year, month0) = (total.div_euclid(12), total.rem_euclid(12));
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1)
        .expect("dia 1 de um mês calculado é sempre válido")
}

/// Gera 12 meses de métricas financeiras terminando no mês de `today`,
/// em ordem cronológica crescente (mês mais antigo primeiro).
pub fn generate_financial_metrics(rng: &mut impl Rng, today: NaiveDate) -> Vec<FinancialMetrics> {
    let mut metrics = Vec::with_capacity(12);

    for i in (0..=11u32).rev() {
        let date = month_start(today, i);

        // Rampa linear de crescimento: 0% no mês mais antigo, 5% no atual
        let growth_rate = 1.0 + 0.05 * (11 - i) as f64 / 11.0;
        let random_factor = rng.gen_range(0.9..1.1);

        let revenue = BASE_REVENUE * growth_rate * random_factor;
        let expenses = revenue * rng.gen_range(0.7..0.8);
        let net_income = revenue - expenses;

        metrics.push(FinancialMetrics {
            date,
            revenue,
            expenses,
            net_income,
            gross_margin: (revenue - expenses * 0.6) / revenue * 100.0,
            operating_margin: net_income / revenue * 100.0,
            // Devolve depreciação e amortização estimadas
            ebitda: net_income + expenses * 0.15,
            cash_flow: net_income * rng.gen_range(0.8..1.2),
            working_capital: revenue * 0.25,
            current_ratio: 1.5 + rng.gen_range(0.0..0.5),
            quick_ratio: 1.2 + rng.gen_range(0.0..0.3),
            debt_to_equity: 0.5 + rng.gen_range(0.0..0.3),
            return_on_assets: 8.0 + rng.gen_range(0.0..4.0),
            return_on_equity: 12.0 + rng.gen_range(0.0..6.0),
        });
    }

    metrics
}

/// Gera `count` transações dentro dos últimos 90 dias, ordenadas por data
/// decrescente. Contrato estável: o índice 0 é sempre a mais recente.
pub fn generate_transactions(
    rng: &mut impl Rng,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(count);

    for i in 0..count {
        let kind = if rng.gen_bool(0.6) {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };

        let categories: &[&str] = match kind {
            TransactionKind::Income => &INCOME_CATEGORIES,
            _ => &EXPENSE_CATEGORIES,
        };
        let category = categories[rng.gen_range(0..categories.len())];

        let status = if rng.gen_bool(0.9) {
            TransactionStatus::Completed
        } else {
            TransactionStatus::Pending
        };

        transactions.push(Transaction {
            id: format!("TXN-{}", 1000 + i),
            date: now - Duration::seconds(rng.gen_range(0..TRANSACTION_WINDOW_SECS)),
            kind,
            category: category.to_string(),
            subcategory: format!("{}-Sub{}", category, rng.gen_range(1..=3)),
            amount: Decimal::from(rng.gen_range(1_000..101_000)),
            description: format!("{} transaction for {}", kind, category),
            account: format!("ACC-{}", rng.gen_range(1..=10)),
            department: DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())].to_string(),
            status,
        });
    }

    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

/// Metas de KPI de demonstração. Fixture literal, não randomizada:
/// os valores de variance/status são constantes ilustrativas e não
/// devem ser derivados do sinal da variância.
pub fn generate_kpi_targets() -> Vec<KpiTarget> {
    vec![
        KpiTarget {
            metric: "Revenue Growth".to_string(),
            actual: 12.5,
            target: 10.0,
            variance: 2.5,
            status: KpiStatus::Above,
            trend: KpiTrend::Up,
        },
        KpiTarget {
            metric: "Gross Margin".to_string(),
            actual: 42.3,
            target: 45.0,
            variance: -2.7,
            status: KpiStatus::Below,
            trend: KpiTrend::Stable,
        },
        KpiTarget {
            metric: "Customer Acquisition Cost".to_string(),
            actual: 1250.0,
            target: 1000.0,
            variance: -25.0,
            status: KpiStatus::Below,
            trend: KpiTrend::Up,
        },
        KpiTarget {
            metric: "Cash Runway (months)".to_string(),
            actual: 18.0,
            target: 12.0,
            variance: 6.0,
            status: KpiStatus::Above,
            trend: KpiTrend::Stable,
        },
        KpiTarget {
            metric: "EBITDA Margin".to_string(),
            actual: 22.1,
            target: 20.0,
            variance: 2.1,
            status: KpiStatus::Above,
            trend: KpiTrend::Up,
        },
    ]
}
