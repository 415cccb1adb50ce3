//! Flight Search - request validation and mock offer generation
//!
//! This library validates flight search requests and synthesizes priced,
//! dated offers from a fixed flight catalog. The HTTP layer and the search
//! state container sit on top of these two pure functions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{generate_offers, validate, Clock, FixedClock, FlightCatalog, OfferGenerator, StaticCatalog, SystemClock, ValidatedSearch};
pub use crate::models::{FieldErrors, FlightOffer, SearchField, SearchRequest, TravelClass, TripType};
pub use crate::services::{SearchError, SearchService, SearchStatus, SearchStore};
