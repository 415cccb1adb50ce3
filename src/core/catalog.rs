use crate::models::{FlightTemplate, PriceTable, TimeSlot};

/// Placeholder logo used by the bundled catalog
pub const DEFAULT_AIRLINE_LOGO: &str = "https://via.placeholder.com/50";

/// Reference data the offer generator draws from
///
/// Template ids must be unique; return legs are numbered by offsetting them
/// with the highest template id.
pub trait FlightCatalog: Send + Sync {
    /// Templates in display order
    fn templates(&self) -> &[FlightTemplate];

    /// Departure/arrival times shared by every return leg
    fn return_slot(&self) -> &TimeSlot;
}

/// The fixed three-airline catalog
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    templates: Vec<FlightTemplate>,
    return_slot: TimeSlot,
}

impl StaticCatalog {
    pub fn new(airline_logo: &str) -> Self {
        let template = |id: u32,
                        airline: &str,
                        departure: &str,
                        arrival: &str,
                        stops: u8,
                        emissions: Option<&str>,
                        prices: PriceTable| FlightTemplate {
            id,
            airline: airline.to_string(),
            airline_logo: airline_logo.to_string(),
            slot: TimeSlot::new(departure, arrival),
            duration: "2 hr 45 min".to_string(),
            stops,
            emissions: emissions.map(str::to_string),
            prices,
        };

        Self {
            templates: vec![
                template(1, "Airline A", "06:10 AM", "08:55 AM", 0, None, PriceTable::new(150, 300, 500)),
                template(2, "Airline B", "07:45 AM", "10:30 AM", 1, None, PriceTable::new(200, 400, 600)),
                template(3, "Airline C", "12:30 PM", "03:15 PM", 0, Some("115 kg CO₂"), PriceTable::new(180, 350, 550)),
            ],
            return_slot: TimeSlot::new("06:00 PM", "08:45 PM"),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_AIRLINE_LOGO)
    }
}

impl FlightCatalog for StaticCatalog {
    fn templates(&self) -> &[FlightTemplate] {
        &self.templates
    }

    fn return_slot(&self) -> &TimeSlot {
        &self.return_slot
    }
}
