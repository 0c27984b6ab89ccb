// src/services/report_service.rs
//
// Agregação pura: mesmas entradas produzem sempre as mesmas linhas.
// Nenhuma aleatoriedade é introduzida nesta camada.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    common::format,
    models::financial::{FinancialMetrics, KpiTarget, Transaction, TransactionKind},
    models::reports::{
        DashboardOverview, ExpenseSlice, KpiAnalysisRow, MonthlyMetricsRow, PivotRow, SummaryRow,
    },
};

// Comparações "mês atual vs anterior" exigem pelo menos 2 snapshots.
const MIN_SNAPSHOTS: usize = 2;

// Fatias fixas do gráfico de despesas do dashboard
const EXPENSE_SLICES: [(&str, f64); 5] = [
    ("Operations", 0.35),
    ("Sales & Marketing", 0.25),
    ("R&D", 0.20),
    ("Administration", 0.15),
    ("Other", 0.05),
];

#[derive(Clone)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    fn require_snapshots<'a>(
        &self,
        metrics: &'a [FinancialMetrics],
    ) -> Result<&'a FinancialMetrics, AppError> {
        if metrics.len() < MIN_SNAPSHOTS {
            return Err(AppError::InsufficientData {
                required: MIN_SNAPSHOTS,
                actual: metrics.len(),
            });
        }
        Ok(&metrics[metrics.len() - 1])
    }

    // 1. Aba "Summary": totais do período + métricas do mês corrente
    pub fn summary_rows(
        &self,
        metrics: &[FinancialMetrics],
        report_date: NaiveDate,
    ) -> Result<Vec<SummaryRow>, AppError> {
        let current_month = self.require_snapshots(metrics)?;

        let total_revenue: f64 = metrics.iter().map(|m| m.revenue).sum();
        let total_expenses: f64 = metrics.iter().map(|m| m.expenses).sum();
        let avg_margin: f64 =
            metrics.iter().map(|m| m.gross_margin).sum::<f64>() / metrics.len() as f64;

        let row = |metric: &str, value: String| SummaryRow {
            metric: metric.to_string(),
            value,
        };

        Ok(vec![
            row("Report Date", format::short_date(report_date)),
            row("Period Covered", "12 Months".to_string()),
            row("Total Revenue", format::millions(total_revenue)),
            row("Total Expenses", format::millions(total_expenses)),
            row("Net Profit", format::millions(total_revenue - total_expenses)),
            row("Current Month Revenue", format::millions(current_month.revenue)),
            row(
                "Current Month Margin",
                format!("{:.2}%", current_month.gross_margin),
            ),
            row("Average Margin", format!("{:.2}%", avg_margin)),
            row("Current Ratio", format!("{:.2}", current_month.current_ratio)),
            row("Cash Flow", format::millions(current_month.cash_flow)),
        ])
    }

    // 2. Aba "Monthly Metrics": uma linha por snapshot, 2 casas fixas
    pub fn monthly_rows(&self, metrics: &[FinancialMetrics]) -> Vec<MonthlyMetricsRow> {
        metrics
            .iter()
            .map(|m| MonthlyMetricsRow {
                date: format::short_date(m.date),
                revenue: format!("{:.2}", m.revenue),
                expenses: format!("{:.2}", m.expenses),
                net_income: format!("{:.2}", m.net_income),
                gross_margin: format!("{:.2}", m.gross_margin),
                operating_margin: format!("{:.2}", m.operating_margin),
                ebitda: format!("{:.2}", m.ebitda),
                cash_flow: format!("{:.2}", m.cash_flow),
                current_ratio: format!("{:.2}", m.current_ratio),
                quick_ratio: format!("{:.2}", m.quick_ratio),
                return_on_assets: format!("{:.2}", m.return_on_assets),
                return_on_equity: format!("{:.2}", m.return_on_equity),
            })
            .collect()
    }

    // 3. Aba "Pivot Analysis": agrupa por categoria na ordem de primeira
    // aparição na sequência de transações.
    pub fn pivot_rows(&self, transactions: &[Transaction]) -> Vec<PivotRow> {
        let mut rows: Vec<PivotRow> = Vec::new();
        let mut index_by_category: HashMap<String, usize> = HashMap::new();

        for t in transactions {
            let idx = *index_by_category
                .entry(t.category.clone())
                .or_insert_with(|| {
                    rows.push(PivotRow {
                        category: t.category.clone(),
                        income: Decimal::ZERO,
                        expense: Decimal::ZERO,
                        net: Decimal::ZERO,
                        margin: Decimal::ZERO,
                    });
                    rows.len() - 1
                });

            if t.kind == TransactionKind::Income {
                rows[idx].income += t.amount;
            } else {
                rows[idx].expense += t.amount;
            }
        }

        for row in &mut rows {
            row.net = row.income - row.expense;
            row.margin = if row.income > Decimal::ZERO {
                (row.net / row.income * Decimal::from(100)).round_dp(2)
            } else {
                Decimal::ZERO
            };
        }

        rows
    }

    // 4. Aba "KPI Analysis": fixture + performance = actual/target * 100
    pub fn kpi_rows(&self, kpis: &[KpiTarget]) -> Vec<KpiAnalysisRow> {
        kpis.iter()
            .map(|kpi| KpiAnalysisRow {
                metric: kpi.metric.clone(),
                actual: kpi.actual,
                target: kpi.target,
                variance: kpi.variance,
                status: kpi.status,
                trend: kpi.trend,
                performance: format!("{:.2}", kpi.actual / kpi.target * 100.0),
            })
            .collect()
    }

    // 5. Cards do dashboard: mês corrente vs anterior + quebra de despesas
    pub fn overview(&self, metrics: &[FinancialMetrics]) -> Result<DashboardOverview, AppError> {
        let current = self.require_snapshots(metrics)?;
        let previous = &metrics[metrics.len() - 2];

        let expense_breakdown = EXPENSE_SLICES
            .iter()
            .map(|(name, share)| ExpenseSlice {
                name: name.to_string(),
                value: current.expenses * share,
            })
            .collect();

        Ok(DashboardOverview {
            revenue: current.revenue,
            revenue_change: (current.revenue - previous.revenue) / previous.revenue * 100.0,
            net_income: current.net_income,
            profit_margin: current.net_income / current.revenue * 100.0,
            cash_flow: current.cash_flow,
            current_ratio: current.current_ratio,
            expense_breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::financial::TransactionStatus;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn snapshot(year: i32, month: u32, revenue: f64, expenses: f64) -> FinancialMetrics {
        FinancialMetrics {
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            revenue,
            expenses,
            net_income: revenue - expenses,
            gross_margin: (revenue - expenses * 0.6) / revenue * 100.0,
            operating_margin: (revenue - expenses) / revenue * 100.0,
            ebitda: (revenue - expenses) + expenses * 0.15,
            cash_flow: (revenue - expenses) * 0.9,
            working_capital: revenue * 0.25,
            current_ratio: 1.75,
            quick_ratio: 1.35,
            debt_to_equity: 0.65,
            return_on_assets: 10.0,
            return_on_equity: 15.0,
        }
    }

    fn transaction(category: &str, kind: TransactionKind, amount: Decimal) -> Transaction {
        Transaction {
            id: "TXN-1000".to_string(),
            date: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
            kind,
            category: category.to_string(),
            subcategory: format!("{}-Sub1", category),
            amount,
            description: format!("{} transaction for {}", kind, category),
            account: "ACC-1".to_string(),
            department: "Sales".to_string(),
            status: TransactionStatus::Completed,
        }
    }

    #[test]
    fn pivot_aggregates_income_and_expense_per_category() {
        let service = ReportService::new();
        let transactions = vec![
            transaction("A", TransactionKind::Income, dec!(100)),
            transaction("A", TransactionKind::Expense, dec!(40)),
        ];

        let rows = service.pivot_rows(&transactions);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "A");
        assert_eq!(rows[0].income, dec!(100));
        assert_eq!(rows[0].expense, dec!(40));
        assert_eq!(rows[0].net, dec!(60));
        assert_eq!(rows[0].margin, dec!(60.00));
    }

    #[test]
    fn pivot_without_income_has_zero_margin() {
        let service = ReportService::new();
        let transactions = vec![transaction("Salaries", TransactionKind::Expense, dec!(500))];

        let rows = service.pivot_rows(&transactions);

        assert_eq!(rows[0].income, Decimal::ZERO);
        assert_eq!(rows[0].net, dec!(-500));
        assert_eq!(rows[0].margin, dec!(0.00));
    }

    #[test]
    fn pivot_preserves_first_seen_category_order() {
        let service = ReportService::new();
        let transactions = vec![
            transaction("Marketing", TransactionKind::Expense, dec!(10)),
            transaction("Product Sales", TransactionKind::Income, dec!(20)),
            transaction("Marketing", TransactionKind::Expense, dec!(30)),
            transaction("Licensing", TransactionKind::Income, dec!(40)),
        ];

        let rows = service.pivot_rows(&transactions);

        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, ["Marketing", "Product Sales", "Licensing"]);
        assert_eq!(rows[0].expense, dec!(40));
    }

    #[test]
    fn summary_requires_two_snapshots() {
        let service = ReportService::new();
        let metrics = vec![snapshot(2025, 8, 1000.0, 400.0)];
        let report_date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();

        let err = service.summary_rows(&metrics, report_date).unwrap_err();
        match err {
            AppError::InsufficientData { required, actual } => {
                assert_eq!(required, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn summary_renders_totals_in_millions() {
        let service = ReportService::new();
        let metrics = vec![
            snapshot(2025, 7, 4_000_000.0, 3_000_000.0),
            snapshot(2025, 8, 6_000_000.0, 4_000_000.0),
        ];
        let report_date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();

        let rows = service.summary_rows(&metrics, report_date).unwrap();

        assert_eq!(rows[0].metric, "Report Date");
        assert_eq!(rows[0].value, "8/7/2025");
        assert_eq!(rows[2].metric, "Total Revenue");
        assert_eq!(rows[2].value, "$10.00M");
        assert_eq!(rows[3].value, "$7.00M");
        assert_eq!(rows[4].metric, "Net Profit");
        assert_eq!(rows[4].value, "$3.00M");
        assert_eq!(rows[5].metric, "Current Month Revenue");
        assert_eq!(rows[5].value, "$6.00M");
        assert_eq!(rows[8].metric, "Current Ratio");
        assert_eq!(rows[8].value, "1.75");
    }

    #[test]
    fn monthly_rows_render_two_decimals_and_short_dates() {
        let service = ReportService::new();
        let metrics = vec![snapshot(2024, 1, 1000.0, 400.0)];

        let rows = service.monthly_rows(&metrics);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "1/1/2024");
        assert_eq!(rows[0].revenue, "1000.00");
        assert_eq!(rows[0].expenses, "400.00");
        assert_eq!(rows[0].net_income, "600.00");
        assert_eq!(rows[0].current_ratio, "1.75");
    }

    #[test]
    fn kpi_rows_compute_performance_percentage() {
        let service = ReportService::new();
        let kpis = crate::data::generator::generate_kpi_targets();

        let rows = service.kpi_rows(&kpis);

        assert_eq!(rows.len(), 5);
        // Revenue Growth: 12.5 / 10 * 100
        assert_eq!(rows[0].performance, "125.00");
        // Customer Acquisition Cost: 1250 / 1000 * 100
        assert_eq!(rows[2].performance, "125.00");
        // Gross Margin: 42.3 / 45 * 100
        assert_eq!(rows[1].performance, "94.00");
    }

    #[test]
    fn overview_compares_current_and_previous_month() {
        let service = ReportService::new();
        let metrics = vec![
            snapshot(2025, 7, 4_000_000.0, 3_000_000.0),
            snapshot(2025, 8, 5_000_000.0, 3_500_000.0),
        ];

        let overview = service.overview(&metrics).unwrap();

        assert_eq!(overview.revenue, 5_000_000.0);
        assert_eq!(overview.revenue_change, 25.0);
        assert_eq!(overview.net_income, 1_500_000.0);
        assert_eq!(overview.profit_margin, 30.0);

        let shares: f64 = overview.expense_breakdown.iter().map(|s| s.value).sum();
        assert!((shares - 3_500_000.0).abs() < 1e-6);
        assert_eq!(overview.expense_breakdown[0].name, "Operations");
        assert_eq!(overview.expense_breakdown[0].value, 3_500_000.0 * 0.35);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let service = ReportService::new();
        let metrics = vec![
            snapshot(2025, 7, 4_100_000.0, 3_050_000.0),
            snapshot(2025, 8, 5_200_000.0, 3_700_000.0),
        ];
        let transactions = vec![
            transaction("A", TransactionKind::Income, dec!(100)),
            transaction("B", TransactionKind::Expense, dec!(40)),
        ];
        let report_date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();

        assert_eq!(
            service.summary_rows(&metrics, report_date).unwrap(),
            service.summary_rows(&metrics, report_date).unwrap()
        );
        assert_eq!(service.monthly_rows(&metrics), service.monthly_rows(&metrics));
        assert_eq!(
            service.pivot_rows(&transactions),
            service.pivot_rows(&transactions)
        );
    }
}
