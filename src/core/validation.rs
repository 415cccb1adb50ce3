use chrono::NaiveDate;
use crate::models::{FieldErrors, SearchField, SearchRequest, TravelClass, TripType};

pub const ORIGIN_REQUIRED: &str = "Origin is required";
pub const DESTINATION_REQUIRED: &str = "Destination is required";
pub const DEPARTURE_REQUIRED: &str = "Departure date is required";
pub const DEPARTURE_IN_PAST: &str = "Departure date cannot be in the past";
pub const RETURN_REQUIRED: &str = "Return date is required for a round trip";
pub const RETURN_NOT_AFTER_DEPARTURE: &str = "Return date must be after the departure date";

/// Check a search request for completeness and date consistency
///
/// Every rule runs; the result holds at most one message per field and is
/// empty when the request can be handed to the offer generator. `today` is
/// compared by calendar day, so a departure on `today` is accepted.
pub fn validate(request: &SearchRequest, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if request.origin.trim().is_empty() {
        errors.insert(SearchField::Origin, ORIGIN_REQUIRED);
    }
    if request.destination.trim().is_empty() {
        errors.insert(SearchField::Destination, DESTINATION_REQUIRED);
    }

    match request.departure_date {
        None => errors.insert(SearchField::DepartureDate, DEPARTURE_REQUIRED),
        Some(departure) if departure < today => {
            errors.insert(SearchField::DepartureDate, DEPARTURE_IN_PAST)
        }
        Some(_) => {}
    }

    if request.trip_type == TripType::RoundTrip {
        match (request.departure_date, request.return_date) {
            (_, None) => errors.insert(SearchField::ReturnDate, RETURN_REQUIRED),
            (Some(departure), Some(ret)) if ret <= departure => {
                errors.insert(SearchField::ReturnDate, RETURN_NOT_AFTER_DEPARTURE)
            }
            _ => {}
        }
    }

    errors
}

/// A search request that passed validation
///
/// Only [`SearchRequest::validated`] builds one. One-way searches never carry
/// a return date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    origin: String,
    destination: String,
    departure_date: NaiveDate,
    return_date: Option<NaiveDate>,
    travel_class: TravelClass,
}

impl ValidatedSearch {
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    pub fn travel_class(&self) -> TravelClass {
        self.travel_class
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_date.is_some()
    }
}

impl SearchRequest {
    /// Validate against `today` and, on success, lock the request down for generation
    pub fn validated(self, today: NaiveDate) -> Result<ValidatedSearch, FieldErrors> {
        let errors = validate(&self, today);
        if !errors.is_empty() {
            return Err(errors);
        }

        let (departure_date, return_date) = match self.departure_date {
            Some(departure) => match self.trip_type {
                TripType::RoundTrip => (departure, self.return_date),
                TripType::OneWay => (departure, None),
            },
            // validate() flags a missing departure date
            None => {
                let mut errors = FieldErrors::new();
                errors.insert(SearchField::DepartureDate, DEPARTURE_REQUIRED);
                return Err(errors);
            }
        };

        Ok(ValidatedSearch {
            origin: self.origin,
            destination: self.destination,
            departure_date,
            return_date,
            travel_class: self.travel_class,
        })
    }
}
