//! Property domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A managed rental property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub units: u32,
    pub occupied_units: u32,
    /// Rent per occupied unit.
    pub monthly_rent: Decimal,
    pub manager_id: Uuid,
}

impl Property {
    /// Fraction of units occupied, `0.0` for a property with no units.
    pub fn occupancy_rate(&self) -> f64 {
        if self.units == 0 {
            return 0.0;
        }
        f64::from(self.occupied_units.min(self.units)) / f64::from(self.units)
    }

    /// Rent collected across occupied units.
    pub fn monthly_revenue(&self) -> Decimal {
        self.monthly_rent * Decimal::from(self.occupied_units)
    }
}

/// Finds a property by id with a linear scan.
pub fn find_property(properties: &[Property], id: Uuid) -> Option<&Property> {
    properties.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(units: u32, occupied: u32) -> Property {
        Property {
            id: Uuid::new_v4(),
            name: "Maple Court".to_string(),
            address: "12 Maple Ct".to_string(),
            units,
            occupied_units: occupied,
            monthly_rent: Decimal::from(1200),
            manager_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_occupancy_rate() {
        assert_eq!(property(4, 3).occupancy_rate(), 0.75);
        assert_eq!(property(0, 0).occupancy_rate(), 0.0);
        assert_eq!(property(2, 5).occupancy_rate(), 1.0);
    }

    #[test]
    fn test_monthly_revenue() {
        assert_eq!(property(4, 3).monthly_revenue(), Decimal::from(3600));
        assert_eq!(property(4, 0).monthly_revenue(), Decimal::ZERO);
    }

    #[test]
    fn test_find_property() {
        let a = property(1, 1);
        let b = property(2, 1);
        let all = vec![a.clone(), b.clone()];
        assert_eq!(find_property(&all, b.id), Some(&b));
        assert!(find_property(&all, Uuid::new_v4()).is_none());
    }
}
