use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Trip type selected on the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    #[default]
    RoundTrip,
}

/// Cabin class used to pick a price from a template's price table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelClass {
    #[default]
    Economy,
    Business,
    FirstClass,
}

/// Direction of a flight segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    Outbound,
    Return,
}

/// Fixed per-airline fares, one per travel class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub economy: u32,
    pub business: u32,
    #[serde(rename = "first-class")]
    pub first_class: u32,
}

impl PriceTable {
    pub const fn new(economy: u32, business: u32, first_class: u32) -> Self {
        Self {
            economy,
            business,
            first_class,
        }
    }

    #[inline]
    pub fn price_for(&self, class: TravelClass) -> u32 {
        match class {
            TravelClass::Economy => self.economy,
            TravelClass::Business => self.business,
            TravelClass::FirstClass => self.first_class,
        }
    }
}

/// Departure/arrival pair rendered as display times ("06:10 AM")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub departure_time: String,
    pub arrival_time: String,
}

impl TimeSlot {
    pub fn new(departure_time: impl Into<String>, arrival_time: impl Into<String>) -> Self {
        Self {
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
        }
    }
}

/// Reference flight definition used to synthesize offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightTemplate {
    pub id: u32,
    pub airline: String,
    pub airline_logo: String,
    #[serde(flatten)]
    pub slot: TimeSlot,
    pub duration: String,
    pub stops: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions: Option<String>,
    pub prices: PriceTable,
}

/// A priced, dated flight presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: u32,
    pub airline: String,
    pub airline_logo: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub stops: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions: Option<String>,
    pub price: u32,
    pub date: NaiveDate,
    pub leg: Leg,
}

/// Search form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Origin,
    Destination,
    DepartureDate,
    ReturnDate,
    Travelers,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Origin => "origin",
            SearchField::Destination => "destination",
            SearchField::DepartureDate => "departureDate",
            SearchField::ReturnDate => "returnDate",
            SearchField::Travelers => "travelers",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to error message mapping. Empty means the request is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<SearchField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: SearchField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: SearchField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: SearchField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SearchField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Merge another set of errors into this one; entries from `other` win
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}
