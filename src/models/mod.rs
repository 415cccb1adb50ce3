// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FieldErrors, FlightOffer, FlightTemplate, Leg, PriceTable, SearchField, TimeSlot, TravelClass, TripType};
pub use requests::SearchRequest;
pub use responses::{ErrorResponse, HealthResponse, SearchFlightsResponse, SearchResultsResponse};
