//! Portfolio analytics.

use rust_decimal::Decimal;

use crate::models::{Analytics, Property, ServiceRequest};

const SECS_PER_DAY: f64 = 86_400.0;

/// Computes portfolio figures, or `None` when there are no properties.
pub fn compute_analytics(properties: &[Property], requests: &[ServiceRequest]) -> Option<Analytics> {
    if properties.is_empty() {
        return None;
    }

    let total_units: u32 = properties.iter().map(|p| p.units).sum();
    let occupied_units: u32 = properties
        .iter()
        .map(|p| p.occupied_units.min(p.units))
        .sum();
    let occupancy_rate = if total_units == 0 {
        0.0
    } else {
        f64::from(occupied_units) / f64::from(total_units)
    };
    let monthly_revenue: Decimal = properties.iter().map(Property::monthly_revenue).sum();

    let resolution_days: Vec<f64> = requests
        .iter()
        .filter_map(|r| r.completed_at.map(|done| done - r.created_at))
        .map(|elapsed| elapsed.num_seconds() as f64 / SECS_PER_DAY)
        .collect();
    let average_resolution_days = if resolution_days.is_empty() {
        None
    } else {
        Some(resolution_days.iter().sum::<f64>() / resolution_days.len() as f64)
    };

    Some(Analytics {
        occupancy_rate,
        monthly_revenue,
        total_units,
        occupied_units,
        average_resolution_days,
    })
}
