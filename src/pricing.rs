// Booking price computation. Every function here is total: malformed or
// inverted date ranges fall back to a one-day rental instead of erroring,
// matching the billing behavior the rest of the platform expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fleet::Vehicle;

// Rental dates travel through the app as display strings, e.g. "Jun 15, 2025".
pub const RENTAL_DATE_FORMAT: &str = "%b %d, %Y";

// Billing rates
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub tax_rate: f64,
    pub insurance_daily_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.12,
            insurance_daily_rate: 500.0,
        }
    }
}

// Itemized price breakdown for a prospective rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub days: i64,
    pub daily_rate: f64,
    pub subtotal: f64,
    pub insurance: f64,
    pub tax: f64,
    pub total: f64,
}

// Calendar-day difference between two rental date strings, clamped to a
// minimum of one day. Unparseable input or a return date before the pickup
// date also bills one day; that fallback is load-bearing for same-day
// rentals and must not become an error.
pub fn rental_days(pickup_date: &str, return_date: &str) -> i64 {
    let pickup = NaiveDate::parse_from_str(pickup_date, RENTAL_DATE_FORMAT);
    let ret = NaiveDate::parse_from_str(return_date, RENTAL_DATE_FORMAT);

    match (pickup, ret) {
        (Ok(pickup), Ok(ret)) => (ret - pickup).num_days().max(1),
        _ => {
            debug!(pickup_date, return_date, "unparseable rental dates, billing one day");
            1
        }
    }
}

// subtotal = days x daily rate
// insurance = days x flat daily rate, when taken
// tax = tax rate x (subtotal + insurance)
// total = subtotal + insurance + tax
pub fn price_breakdown(
    vehicle: &Vehicle,
    pickup_date: &str,
    return_date: &str,
    with_insurance: bool,
    config: &PricingConfig,
) -> PriceBreakdown {
    let days = rental_days(pickup_date, return_date);
    let subtotal = days as f64 * vehicle.price_per_day;
    let insurance = if with_insurance {
        days as f64 * config.insurance_daily_rate
    } else {
        0.0
    };
    let tax = config.tax_rate * (subtotal + insurance);

    PriceBreakdown {
        days,
        daily_rate: vehicle.price_per_day,
        subtotal,
        insurance,
        tax,
        total: subtotal + insurance + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{FuelType, Transmission, VehicleCategory};

    fn vehicle_priced(price_per_day: f64) -> Vehicle {
        Vehicle {
            id: "v1".to_string(),
            name: "Toyota Innova".to_string(),
            brand: "Toyota".to_string(),
            model: "Innova".to_string(),
            year: 2022,
            description: "Seven seater MPV".to_string(),
            price_per_day,
            rating: 4.5,
            review_count: 88,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            seats: 7,
            is_available: true,
            category: VehicleCategory::Van,
            features: vec!["Aircon".to_string()],
            pickup_locations: vec!["Makati".to_string()],
            deposit: 5000.0,
            min_renter_age: 21,
        }
    }

    #[test]
    fn test_rental_days_counts_calendar_days() {
        assert_eq!(rental_days("Jun 15, 2025", "Jun 18, 2025"), 3);
        assert_eq!(rental_days("Dec 30, 2025", "Jan 02, 2026"), 3);
    }

    #[test]
    fn test_same_day_rental_bills_one_day() {
        assert_eq!(rental_days("Jun 15, 2025", "Jun 15, 2025"), 1);
    }

    #[test]
    fn test_inverted_range_bills_one_day() {
        assert_eq!(rental_days("Jun 18, 2025", "Jun 15, 2025"), 1);
    }

    #[test]
    fn test_unparseable_dates_bill_one_day() {
        assert_eq!(rental_days("not a date", "Jun 15, 2025"), 1);
        assert_eq!(rental_days("Jun 15, 2025", ""), 1);
        assert_eq!(rental_days("2025-06-15", "2025-06-18"), 1);
    }

    #[test]
    fn test_three_day_rental_without_insurance() {
        let breakdown = price_breakdown(
            &vehicle_priced(1800.0),
            "Jun 15, 2025",
            "Jun 18, 2025",
            false,
            &PricingConfig::default(),
        );

        assert_eq!(breakdown.days, 3);
        assert_eq!(breakdown.subtotal, 5400.0);
        assert_eq!(breakdown.insurance, 0.0);
        assert_eq!(breakdown.tax, 648.0);
        assert_eq!(breakdown.total, 6048.0);
    }

    #[test]
    fn test_three_day_rental_with_insurance() {
        let breakdown = price_breakdown(
            &vehicle_priced(1800.0),
            "Jun 15, 2025",
            "Jun 18, 2025",
            true,
            &PricingConfig::default(),
        );

        assert_eq!(breakdown.days, 3);
        assert_eq!(breakdown.subtotal, 5400.0);
        assert_eq!(breakdown.insurance, 1500.0);
        assert_eq!(breakdown.tax, 828.0);
        assert_eq!(breakdown.total, 7728.0);
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let config = PricingConfig::default();
        for (price, days_apart, insurance) in [
            (1500.0, "Jul 01, 2025", false),
            (2800.0, "Jul 04, 2025", true),
            (4200.0, "Aug 30, 2025", true),
        ] {
            let breakdown =
                price_breakdown(&vehicle_priced(price), "Jun 30, 2025", days_apart, insurance, &config);
            assert_eq!(
                breakdown.total,
                breakdown.subtotal + breakdown.insurance + breakdown.tax
            );
            assert!(breakdown.subtotal >= 0.0);
            assert!(breakdown.insurance >= 0.0);
            assert!(breakdown.tax >= 0.0);
        }
    }
}
