//! Portfolio analytics for property managers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-wide figures shown on the manager dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Analytics {
    pub occupancy_rate: f64,
    pub monthly_revenue: Decimal,
    pub total_units: u32,
    pub occupied_units: u32,
    /// Mean days from creation to completion; `None` until something completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_resolution_days: Option<f64>,
}
