// src/common/format.rs

use chrono::{Datelike, NaiveDate};

/// Data no formato curto M/D/YYYY, sem zeros à esquerda.
/// O formato é fixo (não depende de locale) para manter o contrato
/// dos exports estável entre ambientes.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Valor monetário em milhões: "$12.34M".
pub fn millions(value: f64) -> String {
    format!("${:.2}M", value / 1_000_000.0)
}
