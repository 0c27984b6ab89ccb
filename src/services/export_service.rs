// src/services/export_service.rs
//
// Materializa as tabelas agregadas como artefatos baixáveis: o workbook
// XLSX de cinco abas e o CSV simples. Os bytes são devolvidos ao handler,
// que decide o destino (corpo da resposta HTTP, arquivo, stream).

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};

use crate::{
    common::error::AppError,
    common::format,
    models::financial::{FinancialMetrics, KpiTarget, Transaction},
    services::report_service::ReportService,
};

// Ordem fixa das abas do workbook
const SHEET_SUMMARY: &str = "Summary";
const SHEET_MONTHLY: &str = "Monthly Metrics";
const SHEET_TRANSACTIONS: &str = "Transactions";
const SHEET_KPI: &str = "KPI Analysis";
const SHEET_PIVOT: &str = "Pivot Analysis";

const MONTHLY_HEADERS: [&str; 12] = [
    "Date",
    "Revenue ($)",
    "Expenses ($)",
    "Net Income ($)",
    "Gross Margin (%)",
    "Operating Margin (%)",
    "EBITDA ($)",
    "Cash Flow ($)",
    "Current Ratio",
    "Quick Ratio",
    "ROA (%)",
    "ROE (%)",
];

const TRANSACTION_HEADERS: [&str; 10] = [
    "Transaction ID",
    "Date",
    "Type",
    "Category",
    "Subcategory",
    "Amount ($)",
    "Department",
    "Account",
    "Status",
    "Description",
];

const KPI_HEADERS: [&str; 7] = [
    "Metric",
    "Actual",
    "Target",
    "Variance",
    "Status",
    "Trend",
    "Performance (%)",
];

const PIVOT_HEADERS: [&str; 5] = [
    "Category",
    "Total Income",
    "Total Expense",
    "Net",
    "Margin (%)",
];

// Larguras uniformes de coluna aplicadas a todas as abas
const COLUMN_WIDTHS: [f64; 10] = [20.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 30.0];

pub const CSV_FILE_NAME: &str = "financial-data.csv";

#[derive(Clone)]
pub struct ExportService {
    report_service: ReportService,
}

impl ExportService {
    pub fn new(report_service: ReportService) -> Self {
        Self { report_service }
    }

    /// Monta o workbook de cinco abas e devolve os bytes do arquivo XLSX.
    pub fn build_workbook(
        &self,
        metrics: &[FinancialMetrics],
        transactions: &[Transaction],
        kpis: &[KpiTarget],
        report_date: NaiveDate,
    ) -> Result<Vec<u8>, AppError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(0xE8F4FD))
            .set_align(FormatAlign::Center);

        // Aba 1: Summary
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_SUMMARY)?;
        style_columns(worksheet)?;
        write_headers(worksheet, &["Metric", "Value"], &header_format)?;
        for (i, row) in self
            .report_service
            .summary_rows(metrics, report_date)?
            .iter()
            .enumerate()
        {
            let r = (i + 1) as u32;
            worksheet.write_string(r, 0, &row.metric)?;
            worksheet.write_string(r, 1, &row.value)?;
        }

        // Aba 2: Monthly Metrics
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_MONTHLY)?;
        style_columns(worksheet)?;
        write_headers(worksheet, &MONTHLY_HEADERS, &header_format)?;
        for (i, row) in self.report_service.monthly_rows(metrics).iter().enumerate() {
            let r = (i + 1) as u32;
            worksheet.write_string(r, 0, &row.date)?;
            worksheet.write_string(r, 1, &row.revenue)?;
            worksheet.write_string(r, 2, &row.expenses)?;
            worksheet.write_string(r, 3, &row.net_income)?;
            worksheet.write_string(r, 4, &row.gross_margin)?;
            worksheet.write_string(r, 5, &row.operating_margin)?;
            worksheet.write_string(r, 6, &row.ebitda)?;
            worksheet.write_string(r, 7, &row.cash_flow)?;
            worksheet.write_string(r, 8, &row.current_ratio)?;
            worksheet.write_string(r, 9, &row.quick_ratio)?;
            worksheet.write_string(r, 10, &row.return_on_assets)?;
            worksheet.write_string(r, 11, &row.return_on_equity)?;
        }

        // Aba 3: Transactions
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_TRANSACTIONS)?;
        style_columns(worksheet)?;
        write_headers(worksheet, &TRANSACTION_HEADERS, &header_format)?;
        for (i, t) in transactions.iter().enumerate() {
            let r = (i + 1) as u32;
            worksheet.write_string(r, 0, &t.id)?;
            worksheet.write_string(r, 1, format::short_date(t.date.date_naive()))?;
            worksheet.write_string(r, 2, t.kind.to_string())?;
            worksheet.write_string(r, 3, &t.category)?;
            worksheet.write_string(r, 4, &t.subcategory)?;
            worksheet.write_string(r, 5, format!("{:.2}", t.amount))?;
            worksheet.write_string(r, 6, &t.department)?;
            worksheet.write_string(r, 7, &t.account)?;
            worksheet.write_string(r, 8, t.status.to_string())?;
            worksheet.write_string(r, 9, &t.description)?;
        }

        // Aba 4: KPI Analysis
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_KPI)?;
        style_columns(worksheet)?;
        write_headers(worksheet, &KPI_HEADERS, &header_format)?;
        for (i, row) in self.report_service.kpi_rows(kpis).iter().enumerate() {
            let r = (i + 1) as u32;
            worksheet.write_string(r, 0, &row.metric)?;
            worksheet.write_number(r, 1, row.actual)?;
            worksheet.write_number(r, 2, row.target)?;
            worksheet.write_number(r, 3, row.variance)?;
            worksheet.write_string(r, 4, row.status.to_string())?;
            worksheet.write_string(r, 5, row.trend.to_string())?;
            worksheet.write_string(r, 6, &row.performance)?;
        }

        // Aba 5: Pivot Analysis
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_PIVOT)?;
        style_columns(worksheet)?;
        write_headers(worksheet, &PIVOT_HEADERS, &header_format)?;
        for (i, row) in self
            .report_service
            .pivot_rows(transactions)
            .iter()
            .enumerate()
        {
            let r = (i + 1) as u32;
            worksheet.write_string(r, 0, &row.category)?;
            worksheet.write_string(r, 1, format!("{:.2}", row.income))?;
            worksheet.write_string(r, 2, format!("{:.2}", row.expense))?;
            worksheet.write_string(r, 3, format!("{:.2}", row.net))?;
            worksheet.write_string(r, 4, format!("{:.2}", row.margin))?;
        }

        Ok(workbook.save_to_buffer()?)
    }

    /// CSV de 4 colunas direto da sequência de métricas, sem linha em
    /// branco no final.
    ///
    /// Sem quoting/escaping de campos: o payload é sempre numérico ou
    /// data. Se o export ganhar campos de texto livre (categorias,
    /// descrições), esta decisão precisa ser revista.
    pub fn build_csv(&self, metrics: &[FinancialMetrics]) -> String {
        let mut lines = Vec::with_capacity(metrics.len() + 1);
        lines.push("Date,Revenue,Expenses,Net Income".to_string());

        for m in metrics {
            lines.push(format!(
                "{},{},{},{}",
                format::short_date(m.date),
                m.revenue,
                m.expenses,
                m.net_income
            ));
        }

        lines.join("\n")
    }

    /// Nome do arquivo: `{base}-{YYYY-MM-DD}.xlsx`.
    pub fn workbook_file_name(&self, base: &str, date: NaiveDate) -> String {
        format!("{}-{}.xlsx", base, date.format("%Y-%m-%d"))
    }
}

fn write_headers(
    worksheet: &mut Worksheet,
    headers: &[&str],
    header_format: &Format,
) -> Result<(), AppError> {
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }
    Ok(())
}

fn style_columns(worksheet: &mut Worksheet) -> Result<(), AppError> {
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator;
    use chrono::{TimeZone, Utc};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn service() -> ExportService {
        ExportService::new(ReportService::new())
    }

    fn single_snapshot() -> FinancialMetrics {
        FinancialMetrics {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            revenue: 1000.0,
            expenses: 400.0,
            net_income: 600.0,
            gross_margin: 76.0,
            operating_margin: 60.0,
            ebitda: 660.0,
            cash_flow: 540.0,
            working_capital: 250.0,
            current_ratio: 1.75,
            quick_ratio: 1.35,
            debt_to_equity: 0.65,
            return_on_assets: 10.0,
            return_on_equity: 15.0,
        }
    }

    #[test]
    fn csv_matches_reference_output() {
        let csv = service().build_csv(&[single_snapshot()]);
        assert_eq!(csv, "Date,Revenue,Expenses,Net Income\n1/1/2024,1000,400,600");
    }

    #[test]
    fn csv_has_one_row_per_snapshot_and_no_trailing_newline() {
        let mut second = single_snapshot();
        second.date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        second.revenue = 1200.5;
        second.expenses = 900.25;
        second.net_income = 300.25;

        let csv = service().build_csv(&[single_snapshot(), second]);

        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,Revenue,Expenses,Net Income");
        assert_eq!(lines[2], "2/1/2024,1200.5,900.25,300.25");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn workbook_builds_from_generated_data() {
        let mut rng = SmallRng::seed_from_u64(42);
        let today = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap();

        let metrics = generator::generate_financial_metrics(&mut rng, today);
        let transactions = generator::generate_transactions(&mut rng, now, 100);
        let kpis = generator::generate_kpi_targets();

        let bytes = service()
            .build_workbook(&metrics, &transactions, &kpis, today)
            .unwrap();

        // XLSX é um container ZIP
        assert!(bytes.starts_with(b"PK"));
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn workbook_propagates_report_preconditions() {
        let result = service().build_workbook(
            &[single_snapshot()],
            &[],
            &[],
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );

        assert!(matches!(
            result,
            Err(AppError::InsufficientData { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn workbook_file_name_carries_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        assert_eq!(
            service().workbook_file_name("financial-report", date),
            "financial-report-2025-08-07.xlsx"
        );
        assert_eq!(
            service().workbook_file_name("financial-metrics-report", date),
            "financial-metrics-report-2025-08-07.xlsx"
        );
    }
}
