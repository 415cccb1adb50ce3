use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::domain::{TravelClass, TripType};

/// Flight search request, built from form state at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub trip_type: TripType,
    /// Kept wide so out-of-range numbers reach the range check instead of failing to parse
    #[validate(range(min = 1, max = 10))]
    #[serde(default = "default_travelers")]
    pub travelers: i64,
    #[serde(default)]
    pub travel_class: TravelClass,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub return_date: Option<NaiveDate>,
}

fn default_travelers() -> i64 {
    1
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            trip_type: TripType::default(),
            travelers: default_travelers(),
            travel_class: TravelClass::default(),
            origin: String::new(),
            destination: String::new(),
            departure_date: None,
            return_date: None,
        }
    }
}

impl SearchRequest {
    /// Change the trip type. Switching to one-way clears the return date.
    pub fn with_trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        if trip_type == TripType::OneWay {
            self.return_date = None;
        }
        self
    }

    /// Exchange origin and destination
    pub fn swap_endpoints(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }
}

/// Date inputs post an empty string when nothing is picked
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
