// Seed fleet used by the demo screens, benches, and tests, plus a loader
// for fleet files exported as JSON.

use std::path::Path;

use anyhow::Context;

use crate::fleet::{FuelType, Transmission, Vehicle, VehicleCategory};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// A small fleet covering every filter dimension: several brands, both
// transmissions, all common fuel types, city and province pickup points.
pub fn sample_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "car-001".to_string(),
            name: "Toyota Vios".to_string(),
            brand: "Toyota".to_string(),
            model: "Vios".to_string(),
            year: 2022,
            description: "Reliable compact sedan, great for city driving".to_string(),
            price_per_day: 1500.0,
            rating: 4.3,
            review_count: 214,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 5,
            is_available: true,
            category: VehicleCategory::Sedan,
            features: strings(&["Bluetooth", "Dashcam", "Reverse Camera"]),
            pickup_locations: strings(&["Makati", "Quezon City"]),
            deposit: 3000.0,
            min_renter_age: 21,
        },
        Vehicle {
            id: "car-002".to_string(),
            name: "Toyota Fortuner".to_string(),
            brand: "Toyota".to_string(),
            model: "Fortuner".to_string(),
            year: 2023,
            description: "Seven seater SUV for family trips".to_string(),
            price_per_day: 4200.0,
            rating: 4.8,
            review_count: 96,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            seats: 7,
            is_available: true,
            category: VehicleCategory::Suv,
            features: strings(&["Leather Seats", "Apple CarPlay", "Dashcam"]),
            pickup_locations: strings(&["Makati", "Pasig"]),
            deposit: 8000.0,
            min_renter_age: 23,
        },
        Vehicle {
            id: "car-003".to_string(),
            name: "Honda Civic RS".to_string(),
            brand: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2023,
            description: "Sporty sedan with turbo engine".to_string(),
            price_per_day: 2800.0,
            rating: 4.6,
            review_count: 151,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 5,
            is_available: true,
            category: VehicleCategory::Sedan,
            features: strings(&["Apple CarPlay", "Sunroof", "Cruise Control"]),
            pickup_locations: strings(&["Cebu City"]),
            deposit: 6000.0,
            min_renter_age: 23,
        },
        Vehicle {
            id: "car-004".to_string(),
            name: "Mitsubishi Montero Sport".to_string(),
            brand: "Mitsubishi".to_string(),
            model: "Montero Sport".to_string(),
            year: 2021,
            description: "Rugged SUV that handles provincial roads".to_string(),
            price_per_day: 3800.0,
            rating: 4.5,
            review_count: 77,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            seats: 7,
            is_available: true,
            category: VehicleCategory::Suv,
            features: strings(&["Hill Descent Control", "Dashcam"]),
            pickup_locations: strings(&["Quezon City", "Davao"]),
            deposit: 8000.0,
            min_renter_age: 25,
        },
        Vehicle {
            id: "car-005".to_string(),
            name: "Toyota Hiace Grandia".to_string(),
            brand: "Toyota".to_string(),
            model: "Hiace".to_string(),
            year: 2020,
            description: "Twelve seater van for group outings".to_string(),
            price_per_day: 5500.0,
            rating: 4.2,
            review_count: 63,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Manual,
            seats: 12,
            is_available: true,
            category: VehicleCategory::Van,
            features: strings(&["Aircon", "Luggage Rack"]),
            pickup_locations: strings(&["Manila", "Makati"]),
            deposit: 10000.0,
            min_renter_age: 25,
        },
        Vehicle {
            id: "car-006".to_string(),
            name: "Suzuki Jimny".to_string(),
            brand: "Suzuki".to_string(),
            model: "Jimny".to_string(),
            year: 2022,
            description: "Compact off-roader, easy to park".to_string(),
            price_per_day: 2200.0,
            rating: 4.4,
            review_count: 129,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Manual,
            seats: 4,
            is_available: true,
            category: VehicleCategory::Suv,
            features: strings(&["4x4", "Bluetooth"]),
            pickup_locations: strings(&["Baguio", "Quezon City"]),
            deposit: 4000.0,
            min_renter_age: 21,
        },
        Vehicle {
            id: "car-007".to_string(),
            name: "Ford Ranger Wildtrak".to_string(),
            brand: "Ford".to_string(),
            model: "Ranger".to_string(),
            year: 2023,
            description: "Pickup truck with a full cargo bed".to_string(),
            price_per_day: 3500.0,
            rating: 4.7,
            review_count: 58,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            seats: 5,
            is_available: true,
            category: VehicleCategory::Pickup,
            features: strings(&["Tow Hitch", "Apple CarPlay", "Dashcam"]),
            pickup_locations: strings(&["Pasig", "Cavite"]),
            deposit: 7000.0,
            min_renter_age: 23,
        },
        Vehicle {
            id: "car-008".to_string(),
            name: "Toyota Wigo".to_string(),
            brand: "Toyota".to_string(),
            model: "Wigo".to_string(),
            year: 2021,
            description: "Budget hatchback, light on fuel".to_string(),
            price_per_day: 1200.0,
            rating: 4.1,
            review_count: 312,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Manual,
            seats: 5,
            is_available: true,
            category: VehicleCategory::Hatchback,
            features: strings(&["Bluetooth"]),
            pickup_locations: strings(&["Davao"]),
            deposit: 2500.0,
            min_renter_age: 21,
        },
        Vehicle {
            id: "car-009".to_string(),
            name: "BYD Atto 3".to_string(),
            brand: "BYD".to_string(),
            model: "Atto 3".to_string(),
            year: 2024,
            description: "All-electric crossover with fast charging".to_string(),
            price_per_day: 3200.0,
            rating: 4.6,
            review_count: 41,
            fuel_type: FuelType::Electric,
            transmission: Transmission::Automatic,
            seats: 5,
            is_available: true,
            category: VehicleCategory::Suv,
            features: strings(&["Apple CarPlay", "360 Camera", "Fast Charging"]),
            pickup_locations: strings(&["BGC", "Makati"]),
            deposit: 8000.0,
            min_renter_age: 23,
        },
        Vehicle {
            id: "car-010".to_string(),
            name: "Ford Mustang GT".to_string(),
            brand: "Ford".to_string(),
            model: "Mustang".to_string(),
            year: 2022,
            description: "V8 coupe for special occasions".to_string(),
            price_per_day: 8000.0,
            rating: 4.9,
            review_count: 27,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 4,
            is_available: false,
            category: VehicleCategory::Sports,
            features: strings(&["Leather Seats", "Premium Audio"]),
            pickup_locations: strings(&["BGC"]),
            deposit: 20000.0,
            min_renter_age: 25,
        },
    ]
}

// Load a fleet exported as a JSON array of vehicles.
pub fn load_fleet(path: impl AsRef<Path>) -> anyhow::Result<Vec<Vehicle>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading fleet file {}", path.display()))?;
    let fleet: Vec<Vehicle> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing fleet file {}", path.display()))?;
    Ok(fleet)
}
