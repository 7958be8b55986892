//! Seeded trips.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::entity::CmsEntity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub region_slug: String,
    pub trip_type_slug: String,
    pub duration_days: u32,
    /// Lowest price per person in whole euros.
    pub price_from: u32,
    pub description: String,
    pub highlights: Vec<String>,
    pub image: String,
    pub featured: bool,
    pub departures: Vec<NaiveDate>,
}

impl Trip {
    /// Departures on or after `today`, earliest first.
    pub fn upcoming_departures(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let mut upcoming: Vec<NaiveDate> = self
            .departures
            .iter()
            .copied()
            .filter(|d| *d >= today)
            .collect();
        upcoming.sort();
        upcoming
    }

    pub fn next_departure(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.upcoming_departures(today).into_iter().next()
    }

    /// The trip as a normalized CMS entry, fields under `attributes`.
    pub fn to_entity(&self, id: i64) -> Option<CmsEntity> {
        match serde_json::to_value(self).ok()? {
            Value::Object(attributes) => Some(CmsEntity {
                id,
                document_id: format!("static-trip-{}", self.slug),
                attributes,
            }),
            _ => None,
        }
    }
}

fn dates(ymd: &[(i32, u32, u32)]) -> Vec<NaiveDate> {
    ymd.iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

lazy_static! {
    static ref TRIPS: Vec<Trip> = vec![
        Trip {
            slug: "cappadocie-rondreis".to_string(),
            title: "Rondreis Cappadocië".to_string(),
            subtitle: "Feeënschoorstenen, grotwoningen en een ballonvaart".to_string(),
            region_slug: "cappadocie".to_string(),
            trip_type_slug: "rondreis".to_string(),
            duration_days: 8,
            price_from: 1249,
            description: "Ontdek het maanlandschap van Cappadocië met een lokale gids, \
                          overnacht in een grothotel en zie de zon opkomen vanuit een luchtballon."
                .to_string(),
            highlights: strings(&[
                "Ballonvaart bij zonsopgang",
                "Ondergrondse stad Derinkuyu",
                "Wandeling door de Rose Vallei",
            ]),
            image: "/images/trips/cappadocie.jpg".to_string(),
            featured: true,
            departures: dates(&[(2027, 4, 10), (2027, 5, 15), (2027, 9, 18)]),
        },
        Trip {
            slug: "istanbul-citytrip".to_string(),
            title: "Citytrip Istanbul".to_string(),
            subtitle: "Waar Europa en Azië elkaar ontmoeten".to_string(),
            region_slug: "istanbul".to_string(),
            trip_type_slug: "citytrip".to_string(),
            duration_days: 5,
            price_from: 649,
            description: "Vijf dagen moskeeën, bazaars en de Bosporus, met een hotel \
                          op loopafstand van Sultanahmet."
                .to_string(),
            highlights: strings(&[
                "Hagia Sophia en Blauwe Moskee",
                "Boottocht over de Bosporus",
                "Grote Bazaar en Kruidenbazaar",
            ]),
            image: "/images/trips/istanbul.jpg".to_string(),
            featured: true,
            departures: dates(&[(2027, 3, 6), (2027, 4, 24), (2027, 10, 2)]),
        },
        Trip {
            slug: "turkse-riviera-strandvakantie".to_string(),
            title: "Strandvakantie Turkse Rivièra".to_string(),
            subtitle: "Zon, zee en antieke steden rond Antalya".to_string(),
            region_slug: "turkse-riviera".to_string(),
            trip_type_slug: "strandvakantie".to_string(),
            duration_days: 10,
            price_from: 899,
            description: "Ontspan aan de kust bij Antalya en combineer het strand met \
                          dagtochten naar Perge, Aspendos en de watervallen van Düden."
                .to_string(),
            highlights: strings(&[
                "Boutiquehotel in de oude stad Kaleiçi",
                "Theater van Aspendos",
                "Bootdag langs de kust",
            ]),
            image: "/images/trips/antalya.jpg".to_string(),
            featured: false,
            departures: dates(&[(2027, 5, 29), (2027, 6, 26), (2027, 8, 28)]),
        },
    ];
}

pub fn get_all_trips() -> &'static [Trip] {
    &TRIPS
}

pub fn get_trip_by_slug(slug: &str) -> Option<&'static Trip> {
    TRIPS.iter().find(|t| t.slug == slug)
}

pub fn get_featured_trips() -> Vec<&'static Trip> {
    TRIPS.iter().filter(|t| t.featured).collect()
}

pub fn get_trips_by_region(region_slug: &str) -> Vec<&'static Trip> {
    TRIPS.iter().filter(|t| t.region_slug == region_slug).collect()
}

pub fn get_trips_by_type(trip_type_slug: &str) -> Vec<&'static Trip> {
    TRIPS
        .iter()
        .filter(|t| t.trip_type_slug == trip_type_slug)
        .collect()
}

/// Every seeded trip as a CMS entry, ids starting at 1.
pub fn static_trip_entities() -> Vec<CmsEntity> {
    TRIPS
        .iter()
        .zip(1..)
        .filter_map(|(trip, id)| trip.to_entity(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeded_trips() {
        let trips = get_all_trips();
        assert_eq!(trips.len(), 3);
        assert!(trips.iter().all(|t| t.departures.len() == 3));
    }

    #[test]
    fn test_trip_by_slug() {
        let trip = get_trip_by_slug("cappadocie-rondreis").unwrap();
        assert_eq!(trip.slug, "cappadocie-rondreis");
        assert_eq!(trip.duration_days, 8);
        assert!(get_trip_by_slug("nonexistent").is_none());
    }

    #[test]
    fn test_filters() {
        assert_eq!(get_featured_trips().len(), 2);
        assert_eq!(get_trips_by_region("istanbul")[0].slug, "istanbul-citytrip");
        assert_eq!(
            get_trips_by_type("strandvakantie")[0].slug,
            "turkse-riviera-strandvakantie"
        );
        assert!(get_trips_by_region("antarctica").is_empty());
    }

    #[test]
    fn test_upcoming_departures() {
        let trip = get_trip_by_slug("istanbul-citytrip").unwrap();
        let today = NaiveDate::from_ymd_opt(2027, 4, 24).unwrap();
        assert_eq!(
            trip.upcoming_departures(today),
            vec![today, NaiveDate::from_ymd_opt(2027, 10, 2).unwrap()]
        );
        assert_eq!(trip.next_departure(today), Some(today));

        let late = NaiveDate::from_ymd_opt(2028, 1, 1).unwrap();
        assert_eq!(trip.next_departure(late), None);
    }

    #[test]
    fn test_static_trip_entities() {
        let entities = static_trip_entities();
        assert_eq!(entities.len(), 3);
        assert_eq!(entities[0].id, 1);
        assert_eq!(entities[0].document_id, "static-trip-cappadocie-rondreis");
        assert_eq!(entities[0].slug(), Some("cappadocie-rondreis"));
        assert_eq!(entities[0].field("durationDays"), Some(&json!(8)));
        assert_eq!(entities[1].field("departures.0"), Some(&json!("2027-03-06")));
    }
}
