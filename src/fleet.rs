use serde::{Deserialize, Serialize};

// Fuel type of a listed vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Automatic,
    Manual,
}

// Listing category shown to renters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Sedan,
    Suv,
    Van,
    Pickup,
    Hatchback,
    Luxury,
    Sports,
}

// A listed rental vehicle. Immutable once listed except for `is_available`,
// which is flipped by booking confirmation/cancellation and admin actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub description: String,
    pub price_per_day: f64,
    pub rating: f64,
    pub review_count: u32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub seats: u8,
    pub is_available: bool,
    pub category: VehicleCategory,
    pub features: Vec<String>,
    pub pickup_locations: Vec<String>,
    pub deposit: f64,
    pub min_renter_age: u8,
}

impl Vehicle {
    // Hourly rate is not stored; listings quote a daily price and the
    // hourly figure is derived from it.
    pub fn price_per_hour(&self) -> f64 {
        self.price_per_day / 24.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_price_derived_from_daily() {
        let vehicle = Vehicle {
            id: "v1".to_string(),
            name: "Toyota Vios".to_string(),
            brand: "Toyota".to_string(),
            model: "Vios".to_string(),
            year: 2023,
            description: "Compact sedan".to_string(),
            price_per_day: 2400.0,
            rating: 4.5,
            review_count: 120,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 5,
            is_available: true,
            category: VehicleCategory::Sedan,
            features: vec!["Bluetooth".to_string()],
            pickup_locations: vec!["Makati".to_string()],
            deposit: 5000.0,
            min_renter_age: 21,
        };

        assert_eq!(vehicle.price_per_hour(), 100.0);
    }
}
