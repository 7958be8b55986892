//! Seeded trip categories.

use lazy_static::lazy_static;
use serde::Serialize;

use crate::mappers::icon::IconName;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripType {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: IconName,
}

lazy_static! {
    static ref TRIP_TYPES: Vec<TripType> = vec![
        TripType {
            slug: "rondreis".to_string(),
            name: "Rondreizen".to_string(),
            description: "Meerdere regio's in één reis, met vervoer en gids geregeld.".to_string(),
            icon: IconName::Compass,
        },
        TripType {
            slug: "citytrip".to_string(),
            name: "Citytrips".to_string(),
            description: "Korte stedenreizen met een centraal gelegen hotel.".to_string(),
            icon: IconName::Building,
        },
        TripType {
            slug: "strandvakantie".to_string(),
            name: "Strandvakanties".to_string(),
            description: "Ontspannen aan de kust, met optionele excursies.".to_string(),
            icon: IconName::Sun,
        },
    ];
}

pub fn get_all_trip_types() -> &'static [TripType] {
    &TRIP_TYPES
}

pub fn get_trip_type_by_slug(slug: &str) -> Option<&'static TripType> {
    TRIP_TYPES.iter().find(|t| t.slug == slug)
}
