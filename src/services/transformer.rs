use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::{
    domain::{split_location, CompanyRecord, IndustryCategory},
    error::TransformError,
    services::RawTable,
};

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*\]").unwrap());

const REVENUE_UNIT_SUFFIX: &str = " (USD billions)";

/// Cleans and casts the raw table into typed records. `extracted_at` is
/// captured once per run by the pipeline and shared by every record.
pub fn transform(
    table: &RawTable,
    extracted_at: NaiveDateTime,
) -> Result<Vec<CompanyRecord>, TransformError> {
    log::info!("Transforming data...");

    let columns: Vec<String> = table
        .headers
        .iter()
        .map(|label| rename_column(clean_column(label)))
        .collect();
    let column = |name: &str| {
        columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
    };

    let rank_col = column("Rank")?;
    let name_col = column("Name")?;
    let industry_col = column("Industry")?;
    let revenue_col = column("revenue_billions")?;
    let employees_col = column("Employees")?;
    let location_col = column("hq_location")?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (row, cells) in table.rows.iter().enumerate() {
        let rank = cells[rank_col]
            .parse::<i32>()
            .map_err(|_| TransformError::InvalidRank {
                row,
                value: cells[rank_col].clone(),
            })?;
        let revenue_billions =
            parse_revenue(&cells[revenue_col]).ok_or_else(|| TransformError::InvalidRevenue {
                row,
                value: cells[revenue_col].clone(),
            })?;
        let employees = parse_employees(&cells[employees_col]).ok_or_else(|| {
            TransformError::InvalidEmployees {
                row,
                value: cells[employees_col].clone(),
            }
        })?;

        let industry = cells[industry_col].clone();
        let hq_location = cells[location_col].clone();
        let (hq_city, hq_state) = split_location(&hq_location);

        records.push(CompanyRecord {
            rank,
            name: cells[name_col].clone(),
            industry_category: IndustryCategory::from_industry(&industry),
            industry,
            revenue_billions,
            employees,
            hq_location,
            hq_city,
            hq_state,
            extracted_at,
        });
    }

    log::info!("Transformation completed successfully.");
    Ok(records)
}

/// Embedded newlines become spaces, the fixed currency-unit suffix is
/// dropped, the rest is trimmed.
fn clean_column(label: &str) -> String {
    label
        .replace('\n', " ")
        .replace(REVENUE_UNIT_SUFFIX, "")
        .trim()
        .to_string()
}

fn rename_column(label: String) -> String {
    match label.as_str() {
        "Revenue" => "revenue_billions".to_string(),
        "Headquarters" => "hq_location".to_string(),
        _ => label,
    }
}

/// Bracketed citation markers like "[1]" are stripped before the cast.
fn parse_revenue(value: &str) -> Option<f64> {
    CITATION_RE.replace_all(value, "").trim().parse::<f64>().ok()
}

fn parse_employees(value: &str) -> Option<i32> {
    value.replace(',', "").trim().parse::<i32>().ok()
}
