// Vehicle catalog: the shared in-memory collection every other component
// reads from. Listing order is preserved because search results break sort
// ties by catalog order.

use dashmap::DashMap;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::fleet::Vehicle;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("vehicle already listed: {0}")]
    DuplicateVehicle(String),

    #[error("unknown vehicle: {0}")]
    UnknownVehicle(String),
}

// Repository interface over the vehicle collection. The availability flag is
// the only field mutated after listing; callers are expected to be the sole
// writer for a given vehicle at a time.
pub trait VehicleCatalog: Send + Sync + 'static {
    // List a new vehicle. Ids must be unique.
    fn add(&self, vehicle: Vehicle) -> Result<(), CatalogError>;

    // Point read by id.
    fn get(&self, vehicle_id: &str) -> Option<Vehicle>;

    // Every listed vehicle, in listing order.
    fn list(&self) -> Vec<Vehicle>;

    // Flip the availability flag (booking confirmation, cancellation,
    // or an administrative toggle).
    fn set_availability(&self, vehicle_id: &str, available: bool) -> Result<(), CatalogError>;

    // Delist a vehicle, returning the removed record.
    fn remove(&self, vehicle_id: &str) -> Result<Vehicle, CatalogError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// In-memory catalog: record storage in a concurrent map, listing order in a
// separate index so `list` stays stable across availability flips.
pub struct InMemoryCatalog {
    vehicles: DashMap<String, Vehicle>,
    listing_order: RwLock<Vec<String>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            vehicles: DashMap::new(),
            listing_order: RwLock::new(Vec::new()),
        }
    }

    // Build a catalog pre-populated with a fleet, keeping the given order.
    pub fn with_fleet(fleet: Vec<Vehicle>) -> Self {
        let catalog = Self::new();
        for vehicle in fleet {
            // Later duplicates are dropped rather than replacing the
            // original listing.
            let _ = catalog.add(vehicle);
        }
        catalog
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleCatalog for InMemoryCatalog {
    fn add(&self, vehicle: Vehicle) -> Result<(), CatalogError> {
        if self.vehicles.contains_key(&vehicle.id) {
            return Err(CatalogError::DuplicateVehicle(vehicle.id.clone()));
        }

        debug!(vehicle_id = %vehicle.id, "listing vehicle");
        self.listing_order.write().push(vehicle.id.clone());
        self.vehicles.insert(vehicle.id.clone(), vehicle);
        Ok(())
    }

    fn get(&self, vehicle_id: &str) -> Option<Vehicle> {
        self.vehicles.get(vehicle_id).map(|v| v.clone())
    }

    fn list(&self) -> Vec<Vehicle> {
        let order = self.listing_order.read();
        order
            .iter()
            .filter_map(|id| self.vehicles.get(id).map(|v| v.clone()))
            .collect()
    }

    fn set_availability(&self, vehicle_id: &str, available: bool) -> Result<(), CatalogError> {
        match self.vehicles.get_mut(vehicle_id) {
            Some(mut vehicle) => {
                debug!(vehicle_id, available, "updating availability");
                vehicle.is_available = available;
                Ok(())
            }
            None => Err(CatalogError::UnknownVehicle(vehicle_id.to_string())),
        }
    }

    fn remove(&self, vehicle_id: &str) -> Result<Vehicle, CatalogError> {
        let (_, vehicle) = self
            .vehicles
            .remove(vehicle_id)
            .ok_or_else(|| CatalogError::UnknownVehicle(vehicle_id.to_string()))?;

        self.listing_order.write().retain(|id| id != vehicle_id);
        Ok(vehicle)
    }

    fn len(&self) -> usize {
        self.vehicles.len()
    }
}
