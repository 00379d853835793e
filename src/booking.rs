// Booking flow: a linear four-step state machine over a draft. Each forward
// transition is gated on the fields that step collects; backward transitions
// are always allowed until the booking is confirmed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fleet::Vehicle;
use crate::pricing::{price_breakdown, PriceBreakdown, PricingConfig};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("vehicle is not available for booking: {0}")]
    VehicleUnavailable(String),

    #[error("cannot leave {step:?}, missing: {missing:?}")]
    IncompleteStep {
        step: BookingStep,
        missing: Vec<&'static str>,
    },

    #[error("booking not found: {0}")]
    BookingNotFound(String),

    #[error("booking is not in a cancellable state: {0}")]
    NotCancellable(String),

    #[error("booking flow already confirmed")]
    AlreadyConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStep {
    SelectingDates,
    SelectingLocationAndTime,
    ReviewingSummary,
    Confirmed,
}

impl Default for BookingStep {
    fn default() -> Self {
        BookingStep::SelectingDates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

// A computed, not-yet-persisted price quote for a prospective booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuote {
    pub vehicle_id: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub pickup_location: String,
    pub return_date: String,
    pub return_time: String,
    pub return_location: String,
    pub breakdown: PriceBreakdown,
}

// A confirmed (or later cancelled) booking record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub confirmation_code: String,
    pub user_id: String,
    pub quote: BookingQuote,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

// Everything the booking screens collect before confirmation. Date and time
// fields are the display strings the pricing layer parses.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub vehicle_id: String,
    pub pickup_date: String,
    pub return_date: String,
    pub pickup_time: String,
    pub return_time: String,
    pub pickup_location: String,
    pub return_location: String,
    pub with_insurance: bool,
    step: BookingStep,
}

impl BookingDraft {
    pub fn new(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            ..Self::default()
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    // Fields still empty on the current step. Empty means the step gate is
    // open and the flow may advance.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.step() {
            BookingStep::SelectingDates => {
                if self.pickup_date.is_empty() {
                    missing.push("pickup_date");
                }
                if self.return_date.is_empty() {
                    missing.push("return_date");
                }
            }
            BookingStep::SelectingLocationAndTime => {
                if self.pickup_time.is_empty() {
                    missing.push("pickup_time");
                }
                if self.return_time.is_empty() {
                    missing.push("return_time");
                }
                if self.pickup_location.is_empty() {
                    missing.push("pickup_location");
                }
                if self.return_location.is_empty() {
                    missing.push("return_location");
                }
            }
            BookingStep::ReviewingSummary | BookingStep::Confirmed => {}
        }
        missing
    }

    // Move one step forward, gated on the current step's completeness.
    pub fn advance(&mut self) -> Result<BookingStep, BookingError> {
        let current = self.step();
        if current == BookingStep::Confirmed {
            return Err(BookingError::AlreadyConfirmed);
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::IncompleteStep {
                step: current,
                missing,
            });
        }

        let next = match current {
            BookingStep::SelectingDates => BookingStep::SelectingLocationAndTime,
            BookingStep::SelectingLocationAndTime => BookingStep::ReviewingSummary,
            BookingStep::ReviewingSummary => BookingStep::Confirmed,
            BookingStep::Confirmed => unreachable!(),
        };
        self.step = next;
        Ok(next)
    }

    // Move one step back. The first step and a confirmed flow stay put.
    pub fn back(&mut self) -> BookingStep {
        let previous = match self.step() {
            BookingStep::SelectingDates => BookingStep::SelectingDates,
            BookingStep::SelectingLocationAndTime => BookingStep::SelectingDates,
            BookingStep::ReviewingSummary => BookingStep::SelectingLocationAndTime,
            BookingStep::Confirmed => BookingStep::Confirmed,
        };
        self.step = previous;
        previous
    }

    // Gated fields still empty anywhere in the flow, regardless of the
    // current step. Confirmation requires this to be empty.
    pub fn incomplete_fields(&self) -> Vec<&'static str> {
        let fields: [(&'static str, &str); 6] = [
            ("pickup_date", &self.pickup_date),
            ("return_date", &self.return_date),
            ("pickup_time", &self.pickup_time),
            ("return_time", &self.return_time),
            ("pickup_location", &self.pickup_location),
            ("return_location", &self.return_location),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    // True once every gated field has been collected.
    pub fn is_complete(&self) -> bool {
        self.incomplete_fields().is_empty()
    }

    // Price this draft against a vehicle. Total by construction: date
    // problems surface as a one-day rental, not an error.
    pub fn quote(&self, vehicle: &Vehicle, config: &PricingConfig) -> BookingQuote {
        BookingQuote {
            vehicle_id: vehicle.id.clone(),
            pickup_date: self.pickup_date.clone(),
            pickup_time: self.pickup_time.clone(),
            pickup_location: self.pickup_location.clone(),
            return_date: self.return_date.clone(),
            return_time: self.return_time.clone(),
            return_location: self.return_location.clone(),
            breakdown: price_breakdown(
                vehicle,
                &self.pickup_date,
                &self.return_date,
                self.with_insurance,
                config,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated_draft() -> BookingDraft {
        let mut draft = BookingDraft::new("v1");
        draft.pickup_date = "Jun 15, 2025".to_string();
        draft.return_date = "Jun 18, 2025".to_string();
        draft
    }

    #[test]
    fn test_flow_starts_at_date_selection() {
        let draft = BookingDraft::new("v1");
        assert_eq!(draft.step(), BookingStep::SelectingDates);
    }

    #[test]
    fn test_cannot_leave_dates_until_both_set() {
        let mut draft = BookingDraft::new("v1");
        let err = draft.advance().unwrap_err();
        assert_eq!(
            err,
            BookingError::IncompleteStep {
                step: BookingStep::SelectingDates,
                missing: vec!["pickup_date", "return_date"],
            }
        );

        draft.pickup_date = "Jun 15, 2025".to_string();
        let err = draft.advance().unwrap_err();
        assert_eq!(
            err,
            BookingError::IncompleteStep {
                step: BookingStep::SelectingDates,
                missing: vec!["return_date"],
            }
        );

        draft.return_date = "Jun 18, 2025".to_string();
        assert_eq!(
            draft.advance().unwrap(),
            BookingStep::SelectingLocationAndTime
        );
    }

    #[test]
    fn test_cannot_leave_location_step_until_all_fields_set() {
        let mut draft = dated_draft();
        draft.advance().unwrap();

        draft.pickup_time = "09:00 AM".to_string();
        draft.pickup_location = "Makati".to_string();
        let err = draft.advance().unwrap_err();
        assert_eq!(
            err,
            BookingError::IncompleteStep {
                step: BookingStep::SelectingLocationAndTime,
                missing: vec!["return_time", "return_location"],
            }
        );

        draft.return_time = "06:00 PM".to_string();
        draft.return_location = "Makati".to_string();
        assert_eq!(draft.advance().unwrap(), BookingStep::ReviewingSummary);
        assert!(draft.is_complete());
    }

    #[test]
    fn test_review_advances_to_confirmed_and_is_terminal() {
        let mut draft = dated_draft();
        draft.pickup_time = "09:00 AM".to_string();
        draft.return_time = "06:00 PM".to_string();
        draft.pickup_location = "Makati".to_string();
        draft.return_location = "Pasig".to_string();

        draft.advance().unwrap();
        draft.advance().unwrap();
        assert_eq!(draft.advance().unwrap(), BookingStep::Confirmed);

        assert_eq!(draft.advance().unwrap_err(), BookingError::AlreadyConfirmed);
        assert_eq!(draft.back(), BookingStep::Confirmed);
    }

    #[test]
    fn test_back_walks_the_flow_in_reverse() {
        let mut draft = dated_draft();
        draft.pickup_time = "09:00 AM".to_string();
        draft.return_time = "06:00 PM".to_string();
        draft.pickup_location = "Makati".to_string();
        draft.return_location = "Makati".to_string();

        draft.advance().unwrap();
        draft.advance().unwrap();
        assert_eq!(draft.step(), BookingStep::ReviewingSummary);

        assert_eq!(draft.back(), BookingStep::SelectingLocationAndTime);
        assert_eq!(draft.back(), BookingStep::SelectingDates);
        // Already at the first step.
        assert_eq!(draft.back(), BookingStep::SelectingDates);
    }
}
