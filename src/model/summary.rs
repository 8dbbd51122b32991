use serde::{Deserialize, Serialize};

/// Totals and averages of inhabitants, area & pkb over a set of countries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SummaryDto {
    pub total_inhabitants: i128,
    pub total_area: i128,
    pub total_pkb: i128,
    pub average_inhabitants: f64,
    pub average_area: f64,
    pub average_pkb: f64,
}
