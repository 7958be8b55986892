//! Seeded regions.

use lazy_static::lazy_static;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub image: String,
}

fn region(slug: &str, name: &str, tagline: &str, description: &str) -> Region {
    Region {
        slug: slug.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        image: format!("/images/regions/{}.jpg", slug),
    }
}

lazy_static! {
    static ref REGIONS: Vec<Region> = vec![
        region(
            "istanbul",
            "Istanbul",
            "De stad op twee continenten",
            "Paleizen, moskeeën en bazaars aan weerszijden van de Bosporus.",
        ),
        region(
            "cappadocie",
            "Cappadocië",
            "Een landschap als nergens anders",
            "Tufsteenformaties, grotkerken en ballonvaarten boven de valleien.",
        ),
        region(
            "egeische-kust",
            "Egeïsche Kust",
            "Antieke steden en olijfgaarden",
            "Efeze, Pamukkale en rustige baaien tussen Izmir en Bodrum.",
        ),
        region(
            "turkse-riviera",
            "Turkse Rivièra",
            "Zon en zee aan de Middellandse Zee",
            "Stranden, bergdorpen en Romeinse ruïnes rond Antalya.",
        ),
        region(
            "oost-turkije",
            "Oost-Turkije",
            "Ruig en onontdekt",
            "De Nemrut Dağı, het Vanmeer en eeuwenoude karavaanroutes.",
        ),
    ];
}

pub fn get_all_regions() -> &'static [Region] {
    &REGIONS
}

pub fn get_region_by_slug(slug: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::trips::get_all_trips;

    #[test]
    fn test_five_regions() {
        assert_eq!(get_all_regions().len(), 5);
        assert_eq!(get_region_by_slug("cappadocie").unwrap().name, "Cappadocië");
        assert!(get_region_by_slug("bali").is_none());
    }

    #[test]
    fn test_every_trip_has_a_region() {
        for trip in get_all_trips() {
            assert!(
                get_region_by_slug(&trip.region_slug).is_some(),
                "unknown region {}",
                trip.region_slug
            );
        }
    }
}
