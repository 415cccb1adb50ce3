// Core search exports
pub mod catalog;
pub mod clock;
pub mod generator;
pub mod validation;

pub use catalog::{FlightCatalog, StaticCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::{generate_offers, OfferGenerator};
pub use validation::{validate, ValidatedSearch};
