// Reservation service: the seam between the booking flow and whatever stores
// bookings for real. Quoting is read-only; confirmation checks availability,
// prices the draft, and writes the availability flip through to the catalog.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::booking::{Booking, BookingDraft, BookingError, BookingQuote, BookingStatus};
use crate::catalog::VehicleCatalog;
use crate::pricing::PricingConfig;

// Counters for the reservation service
#[derive(Debug, Default)]
pub struct ReservationStats {
    pub quotes_issued: AtomicUsize,
    pub bookings_confirmed: AtomicUsize,
    pub bookings_rejected: AtomicUsize,
    pub bookings_cancelled: AtomicUsize,
}

#[derive(Debug, Default, Clone)]
pub struct ReservationStatsReport {
    pub quotes_issued: usize,
    pub bookings_confirmed: usize,
    pub bookings_rejected: usize,
    pub bookings_cancelled: usize,
}

// Reservation operations. Async in signature so persistent implementations
// can slot in behind the same trait object; the in-memory implementation
// never suspends.
#[async_trait]
pub trait ReservationApi: Send + Sync + 'static {
    // Price a draft against the current catalog without changing any state.
    async fn quote(&self, draft: &BookingDraft) -> Result<BookingQuote, BookingError>;

    // Confirm a completed draft: the vehicle must exist and be available.
    // On success the vehicle is marked unavailable in the catalog.
    async fn confirm(&self, draft: &BookingDraft, user_id: &str) -> Result<Booking, BookingError>;

    // Cancel a confirmed booking and restore the vehicle's availability.
    async fn cancel(&self, booking_id: &str) -> Result<Booking, BookingError>;

    async fn booking(&self, booking_id: &str) -> Option<Booking>;

    async fn bookings_for_user(&self, user_id: &str) -> Vec<Booking>;

    fn stats(&self) -> ReservationStatsReport;
}

pub struct BookingService {
    catalog: Arc<dyn VehicleCatalog>,
    pricing: PricingConfig,
    bookings: DashMap<String, Booking>,
    stats: ReservationStats,
}

impl BookingService {
    pub fn new(catalog: Arc<dyn VehicleCatalog>) -> Self {
        Self::with_pricing(catalog, PricingConfig::default())
    }

    pub fn with_pricing(catalog: Arc<dyn VehicleCatalog>, pricing: PricingConfig) -> Self {
        Self {
            catalog,
            pricing,
            bookings: DashMap::new(),
            stats: ReservationStats::default(),
        }
    }
}

#[async_trait]
impl ReservationApi for BookingService {
    async fn quote(&self, draft: &BookingDraft) -> Result<BookingQuote, BookingError> {
        let vehicle = self
            .catalog
            .get(&draft.vehicle_id)
            .ok_or_else(|| BookingError::VehicleNotFound(draft.vehicle_id.clone()))?;

        self.stats.quotes_issued.fetch_add(1, Ordering::SeqCst);
        Ok(draft.quote(&vehicle, &self.pricing))
    }

    async fn confirm(&self, draft: &BookingDraft, user_id: &str) -> Result<Booking, BookingError> {
        let incomplete = draft.incomplete_fields();
        if !incomplete.is_empty() {
            self.stats.bookings_rejected.fetch_add(1, Ordering::SeqCst);
            return Err(BookingError::IncompleteStep {
                step: draft.step(),
                missing: incomplete,
            });
        }

        let vehicle = match self.catalog.get(&draft.vehicle_id) {
            Some(vehicle) => vehicle,
            None => {
                self.stats.bookings_rejected.fetch_add(1, Ordering::SeqCst);
                return Err(BookingError::VehicleNotFound(draft.vehicle_id.clone()));
            }
        };

        if !vehicle.is_available {
            warn!(vehicle_id = %vehicle.id, "booking attempt on unavailable vehicle");
            self.stats.bookings_rejected.fetch_add(1, Ordering::SeqCst);
            return Err(BookingError::VehicleUnavailable(vehicle.id));
        }

        let quote = draft.quote(&vehicle, &self.pricing);

        // Write-through: the vehicle leaves the bookable pool as part of
        // confirmation.
        self.catalog
            .set_availability(&vehicle.id, false)
            .map_err(|_| BookingError::VehicleNotFound(vehicle.id.clone()))?;

        let booking = Booking {
            id: format!("booking-{}", rand::random::<u32>()),
            confirmation_code: format!("CONF{}", rand::random::<u16>()),
            user_id: user_id.to_string(),
            quote,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        info!(
            booking_id = %booking.id,
            vehicle_id = %vehicle.id,
            user_id,
            total = booking.quote.breakdown.total,
            "booking confirmed"
        );
        self.bookings.insert(booking.id.clone(), booking.clone());
        self.stats.bookings_confirmed.fetch_add(1, Ordering::SeqCst);
        Ok(booking)
    }

    async fn cancel(&self, booking_id: &str) -> Result<Booking, BookingError> {
        let mut entry = self
            .bookings
            .get_mut(booking_id)
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))?;

        if entry.status != BookingStatus::Confirmed {
            return Err(BookingError::NotCancellable(booking_id.to_string()));
        }

        entry.status = BookingStatus::Cancelled;
        let cancelled = entry.clone();
        drop(entry);

        // The vehicle may have been delisted since; that is not a
        // cancellation failure.
        if let Err(err) = self
            .catalog
            .set_availability(&cancelled.quote.vehicle_id, true)
        {
            debug!(%err, "availability not restored on cancel");
        }

        info!(booking_id, "booking cancelled");
        self.stats.bookings_cancelled.fetch_add(1, Ordering::SeqCst);
        Ok(cancelled)
    }

    async fn booking(&self, booking_id: &str) -> Option<Booking> {
        self.bookings.get(booking_id).map(|b| b.clone())
    }

    async fn bookings_for_user(&self, user_id: &str) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| b.clone())
            .collect();
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        bookings
    }

    fn stats(&self) -> ReservationStatsReport {
        ReservationStatsReport {
            quotes_issued: self.stats.quotes_issued.load(Ordering::SeqCst),
            bookings_confirmed: self.stats.bookings_confirmed.load(Ordering::SeqCst),
            bookings_rejected: self.stats.bookings_rejected.load(Ordering::SeqCst),
            bookings_cancelled: self.stats.bookings_cancelled.load(Ordering::SeqCst),
        }
    }
}
