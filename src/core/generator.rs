use std::sync::Arc;
use crate::core::catalog::{FlightCatalog, StaticCatalog};
use crate::core::validation::ValidatedSearch;
use crate::models::{FlightOffer, FlightTemplate, Leg};

/// Turns catalog templates into priced, dated offers
///
/// Every template is always offered: outbound legs first in catalog order,
/// then, for round trips, the mirrored return legs in the same order with
/// ids offset by the highest template id. For a catalog numbered 1..=N that
/// offset is the catalog size.
#[derive(Clone)]
pub struct OfferGenerator {
    catalog: Arc<dyn FlightCatalog>,
}

impl OfferGenerator {
    pub fn new(catalog: Arc<dyn FlightCatalog>) -> Self {
        Self { catalog }
    }

    pub fn with_static_catalog() -> Self {
        Self::new(Arc::new(StaticCatalog::default()))
    }

    pub fn generate(&self, search: &ValidatedSearch) -> Vec<FlightOffer> {
        let templates = self.catalog.templates();
        let mut offers = Vec::with_capacity(templates.len() * 2);

        offers.extend(templates.iter().map(|template| {
            build_offer(
                template,
                template.id,
                search.origin(),
                search.destination(),
                &template.slot.departure_time,
                &template.slot.arrival_time,
                search,
                Leg::Outbound,
            )
        }));

        if let Some(return_date) = search.return_date() {
            let offset = templates.iter().map(|t| t.id).max().unwrap_or(0);
            let slot = self.catalog.return_slot();

            offers.extend(templates.iter().map(|template| {
                let mut offer = build_offer(
                    template,
                    template.id + offset,
                    search.destination(),
                    search.origin(),
                    &slot.departure_time,
                    &slot.arrival_time,
                    search,
                    Leg::Return,
                );
                offer.date = return_date;
                offer
            }));
        }

        tracing::debug!(
            "Generated {} offers ({} -> {}, round trip: {})",
            offers.len(),
            search.origin(),
            search.destination(),
            search.is_round_trip()
        );

        offers
    }
}

impl Default for OfferGenerator {
    fn default() -> Self {
        Self::with_static_catalog()
    }
}

impl std::fmt::Debug for OfferGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfferGenerator")
            .field("templates", &self.catalog.templates().len())
            .finish()
    }
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn build_offer(
    template: &FlightTemplate,
    id: u32,
    origin: &str,
    destination: &str,
    departure_time: &str,
    arrival_time: &str,
    search: &ValidatedSearch,
    leg: Leg,
) -> FlightOffer {
    FlightOffer {
        id,
        airline: template.airline.clone(),
        airline_logo: template.airline_logo.clone(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure_time: departure_time.to_string(),
        arrival_time: arrival_time.to_string(),
        duration: template.duration.clone(),
        stops: template.stops,
        emissions: template.emissions.clone(),
        price: template.prices.price_for(search.travel_class()),
        date: search.departure_date(),
        leg,
    }
}

/// Generate offers from the bundled static catalog
pub fn generate_offers(search: &ValidatedSearch) -> Vec<FlightOffer> {
    OfferGenerator::with_static_catalog().generate(search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceTable, SearchRequest, TimeSlot, TravelClass, TripType};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn search(trip_type: TripType, travel_class: TravelClass) -> ValidatedSearch {
        SearchRequest {
            trip_type,
            travelers: 1,
            travel_class,
            origin: "NYC".to_string(),
            destination: "LAX".to_string(),
            departure_date: Some(date(2025, 6, 1)),
            return_date: Some(date(2025, 6, 10)),
        }
        .validated(date(2025, 5, 1))
        .unwrap()
    }

    #[test]
    fn test_one_way_business() {
        let offers = generate_offers(&search(TripType::OneWay, TravelClass::Business));

        assert_eq!(offers.len(), 3);
        for offer in &offers {
            assert_eq!(offer.origin, "NYC");
            assert_eq!(offer.destination, "LAX");
            assert_eq!(offer.date, date(2025, 6, 1));
            assert_eq!(offer.leg, Leg::Outbound);
        }
        let prices: Vec<u32> = offers.iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![300, 400, 350]);
        let ids: Vec<u32> = offers.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_round_trip_mirrors_return_leg() {
        let offers = generate_offers(&search(TripType::RoundTrip, TravelClass::Business));

        assert_eq!(offers.len(), 6);
        for (outbound, ret) in offers[..3].iter().zip(&offers[3..]) {
            assert_eq!(ret.id, outbound.id + 3);
            assert_eq!(ret.origin, "LAX");
            assert_eq!(ret.destination, "NYC");
            assert_eq!(ret.date, date(2025, 6, 10));
            assert_eq!(ret.departure_time, "06:00 PM");
            assert_eq!(ret.arrival_time, "08:45 PM");
            assert_eq!(ret.airline, outbound.airline);
            assert_eq!(ret.price, outbound.price);
            assert_eq!(ret.leg, Leg::Return);
        }
    }

    #[test]
    fn test_outbound_keeps_template_times() {
        let offers = generate_offers(&search(TripType::OneWay, TravelClass::Economy));

        assert_eq!(offers[0].departure_time, "06:10 AM");
        assert_eq!(offers[0].arrival_time, "08:55 AM");
        assert_eq!(offers[2].emissions.as_deref(), Some("115 kg CO₂"));
        assert_eq!(offers[0].emissions, None);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let search = search(TripType::RoundTrip, TravelClass::FirstClass);
        let generator = OfferGenerator::default();

        assert_eq!(generator.generate(&search), generator.generate(&search));
    }

    struct SingleFlight {
        templates: Vec<FlightTemplate>,
        return_slot: TimeSlot,
    }

    impl FlightCatalog for SingleFlight {
        fn templates(&self) -> &[FlightTemplate] {
            &self.templates
        }

        fn return_slot(&self) -> &TimeSlot {
            &self.return_slot
        }
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = SingleFlight {
            templates: vec![FlightTemplate {
                id: 7,
                airline: "Red-eye Air".to_string(),
                airline_logo: String::new(),
                slot: TimeSlot::new("11:00 PM", "05:30 AM"),
                duration: "6 hr 30 min".to_string(),
                stops: 2,
                emissions: None,
                prices: PriceTable::new(99, 199, 299),
            }],
            return_slot: TimeSlot::new("09:00 AM", "03:30 PM"),
        };
        let generator = OfferGenerator::new(Arc::new(catalog));

        let offers = generator.generate(&search(TripType::RoundTrip, TravelClass::FirstClass));

        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].id, 7);
        assert_eq!(offers[1].id, 14);
        assert_eq!(offers[1].departure_time, "09:00 AM");
        assert!(offers.iter().all(|o| o.price == 299));
    }

    #[test]
    fn test_return_ids_unique_with_gaps() {
        let template = |id: u32| FlightTemplate {
            id,
            airline: format!("Airline {}", id),
            airline_logo: String::new(),
            slot: TimeSlot::new("08:00 AM", "10:00 AM"),
            duration: "2 hr".to_string(),
            stops: 0,
            emissions: None,
            prices: PriceTable::new(100, 200, 300),
        };
        let catalog = SingleFlight {
            templates: vec![template(1), template(2), template(4)],
            return_slot: TimeSlot::new("06:00 PM", "08:00 PM"),
        };
        let generator = OfferGenerator::new(Arc::new(catalog));

        let offers = generator.generate(&search(TripType::RoundTrip, TravelClass::Economy));
        let ids: Vec<u32> = offers.iter().map(|o| o.id).collect();

        assert_eq!(ids, vec![1, 2, 4, 5, 6, 8]);
    }
}
