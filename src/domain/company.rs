use std::fmt;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryCategory {
    Retail,
    Food,
    Energy,
    Other,
}

impl IndustryCategory {
    /// Case-sensitive substring match, first match wins:
    /// "Retail and Food Distribution" categorizes as Retail.
    pub fn from_industry(industry: &str) -> Self {
        if industry.contains("Retail") {
            IndustryCategory::Retail
        } else if industry.contains("Food") {
            IndustryCategory::Food
        } else if industry.contains("Petroleum") {
            IndustryCategory::Energy
        } else {
            IndustryCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryCategory::Retail => "Retail",
            IndustryCategory::Food => "Food",
            IndustryCategory::Energy => "Energy",
            IndustryCategory::Other => "Other",
        }
    }
}

impl fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transformed row of the companies table. A fresh set is produced on
/// every pipeline run, all sharing the run's `extracted_at` timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    pub rank: i32,
    pub name: String,
    pub industry: String,
    pub revenue_billions: f64,
    pub employees: i32,
    pub hq_location: String,
    pub hq_city: Option<String>,
    pub hq_state: Option<String>,
    pub industry_category: IndustryCategory,
    pub extracted_at: NaiveDateTime,
}

impl fmt::Display for CompanyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}. {} | {} | ${:.2}B | {} employees | {}",
            self.rank,
            self.name,
            self.industry_category,
            self.revenue_billions,
            self.employees,
            self.hq_location,
        )
    }
}

/// Splits "City, State" on the first comma. Locations without a comma have
/// neither city nor state.
pub fn split_location(location: &str) -> (Option<String>, Option<String>) {
    match location.split_once(',') {
        Some((city, state)) => (Some(city.trim().to_string()), Some(state.trim().to_string())),
        None => (None, None),
    }
}
