// Vehicle search: filtering and ordering of the fleet. Filtering is a pure
// predicate over one vehicle; every active criterion must hold (logical AND).
// Ordering is a stable sort applied after filtering, so equal keys keep
// catalog order.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

use tracing::debug;

use crate::fleet::{FuelType, Transmission, Vehicle, VehicleCategory};

// Sentinel brand value coming from the brand dropdown; disables the filter.
pub const ALL_BRANDS: &str = "All Brands";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    PriceLowToHigh,
    PriceHighToLow,
    TopRated,
    Newest,
    MostPopular,
    Alphabetical,
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::MostPopular
    }
}

// A structured filter+sort request. Unset fields are inactive; a default
// criteria matches the whole fleet.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub category: Option<VehicleCategory>,
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_seats: Option<u8>,
    pub max_seats: Option<u8>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub location: Option<String>,
    pub min_rating: Option<f64>,
    pub required_features: Vec<String>,
    pub sort: SortOption,
}

// Counters for the search engine
#[derive(Debug, Default)]
pub struct SearchStats {
    pub searches_run: AtomicUsize,
    pub vehicles_matched: AtomicUsize,
    pub empty_results: AtomicUsize,
    pub average_search_time_ns: AtomicU64,
}

#[derive(Debug, Default, Clone)]
pub struct SearchStatsReport {
    pub searches_run: usize,
    pub vehicles_matched: usize,
    pub empty_results: usize,
    pub average_search_time_ns: u64,
}

// Does one vehicle satisfy every active criterion?
pub fn matches_criteria(vehicle: &Vehicle, criteria: &SearchCriteria) -> bool {
    if let Some(query) = criteria.query.as_deref() {
        let needle = query.to_lowercase();
        let hit = vehicle.name.to_lowercase().contains(&needle)
            || vehicle.brand.to_lowercase().contains(&needle)
            || vehicle.model.to_lowercase().contains(&needle)
            || vehicle.description.to_lowercase().contains(&needle)
            || vehicle
                .features
                .iter()
                .any(|f| f.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    if !criteria.category.map_or(true, |c| vehicle.category == c) {
        return false;
    }

    if !criteria.brand.as_deref().map_or(true, |brand| {
        brand.eq_ignore_ascii_case(ALL_BRANDS) || brand.eq_ignore_ascii_case(&vehicle.brand)
    }) {
        return false;
    }

    // Inclusive on both ends; an inverted range matches nothing.
    if !criteria
        .min_price
        .map_or(true, |min| vehicle.price_per_day >= min)
    {
        return false;
    }

    if !criteria
        .max_price
        .map_or(true, |max| vehicle.price_per_day <= max)
    {
        return false;
    }

    if !criteria.min_seats.map_or(true, |min| vehicle.seats >= min) {
        return false;
    }

    if !criteria.max_seats.map_or(true, |max| vehicle.seats <= max) {
        return false;
    }

    if !criteria.fuel_type.map_or(true, |f| vehicle.fuel_type == f) {
        return false;
    }

    if !criteria
        .transmission
        .map_or(true, |t| vehicle.transmission == t)
    {
        return false;
    }

    if let Some(location) = criteria.location.as_deref() {
        let needle = location.to_lowercase();
        if !vehicle
            .pickup_locations
            .iter()
            .any(|l| l.to_lowercase().contains(&needle))
        {
            return false;
        }
    }

    if !criteria.min_rating.map_or(true, |min| vehicle.rating >= min) {
        return false;
    }

    // Every required feature must match some vehicle feature.
    criteria.required_features.iter().all(|wanted| {
        let wanted = wanted.to_lowercase();
        vehicle
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(&wanted))
    })
}

// Stable sort by the selected key; ties keep the input order.
pub fn sort_vehicles(vehicles: &mut [Vehicle], sort: SortOption) {
    match sort {
        SortOption::PriceLowToHigh => {
            vehicles.sort_by(|a, b| a.price_per_day.total_cmp(&b.price_per_day))
        }
        SortOption::PriceHighToLow => {
            vehicles.sort_by(|a, b| b.price_per_day.total_cmp(&a.price_per_day))
        }
        SortOption::TopRated => vehicles.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Newest => vehicles.sort_by(|a, b| b.year.cmp(&a.year)),
        SortOption::MostPopular => {
            vehicles.sort_by(|a, b| b.review_count.cmp(&a.review_count))
        }
        SortOption::Alphabetical => {
            vehicles.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}

// Search engine over an immutable fleet snapshot
pub struct SearchEngine {
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            stats: SearchStats::default(),
        }
    }

    // Filter the fleet by the criteria, then order by its sort option.
    // An empty result is a value, not an error.
    pub fn search(&self, fleet: &[Vehicle], criteria: &SearchCriteria) -> Vec<Vehicle> {
        let started = Instant::now();
        self.stats.searches_run.fetch_add(1, Ordering::SeqCst);

        let mut results = Vec::new();
        for vehicle in fleet {
            if !matches_criteria(vehicle, criteria) {
                continue;
            }
            results.push(vehicle.clone());
        }

        sort_vehicles(&mut results, criteria.sort);

        self.stats
            .vehicles_matched
            .fetch_add(results.len(), Ordering::SeqCst);
        if results.is_empty() {
            self.stats.empty_results.fetch_add(1, Ordering::SeqCst);
        }
        self.record_search_time(started);

        debug!(
            fleet_size = fleet.len(),
            matched = results.len(),
            "vehicle search complete"
        );
        results
    }

    pub fn stats(&self) -> SearchStatsReport {
        SearchStatsReport {
            searches_run: self.stats.searches_run.load(Ordering::SeqCst),
            vehicles_matched: self.stats.vehicles_matched.load(Ordering::SeqCst),
            empty_results: self.stats.empty_results.load(Ordering::SeqCst),
            average_search_time_ns: self.stats.average_search_time_ns.load(Ordering::SeqCst),
        }
    }

    fn record_search_time(&self, started: Instant) {
        let duration_ns: u64 = started.elapsed().as_nanos() as u64;
        let total_searches = self.stats.searches_run.load(Ordering::SeqCst);
        let current_avg = self.stats.average_search_time_ns.load(Ordering::SeqCst);

        let new_avg = if total_searches <= 1 {
            duration_ns
        } else {
            (current_avg * (total_searches as u64 - 1) + duration_ns) / (total_searches as u64)
        };

        self.stats
            .average_search_time_ns
            .store(new_avg, Ordering::SeqCst);
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
