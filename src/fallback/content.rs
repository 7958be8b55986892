//! Static CMS records.
//!
//! Same shape as what the CMS returns after normalization, so the section
//! mappers handle both sources identically.

use lazy_static::lazy_static;
use serde_json::{json, Value};

pub const HERO_COMPONENT: &str = "blocks.hero-section";
pub const ABOUT_COMPONENT: &str = "blocks.about-section";

lazy_static! {
    static ref HERO_BLOCK: Value = json!({
        "__component": HERO_COMPONENT,
        "id": 1,
        "heading": "Ontdek het echte Turkije",
        "subheading": "Rondreizen, citytrips en strandvakanties",
        "description": "<p>Van de feeënschoorstenen van <strong>Cappadocië</strong> tot de bazaars van Istanbul &amp; de stranden van Antalya.</p>",
        "background": {
            "id": 1,
            "documentId": "static-hero-background",
            "url": "/images/hero-cappadocia.jpg",
            "alternativeText": "Luchtballonnen boven Cappadocië",
            "width": 1920,
            "height": 1080
        },
        "links": [
            {"text": "Bekijk alle reizen", "href": "/reizen", "isButtonLink": true, "type": "PRIMARY"},
            {"text": "Neem contact op", "href": "/contact", "isButtonLink": true, "type": "SECONDARY"}
        ],
        "stats": [
            {"value": "5 Regio's", "label": "Turkije", "icon": "MAP_PIN"},
            {"value": "12+ Reizen", "label": "Beschikbaar", "icon": "PLANE"},
            {"value": "100%", "label": "Tevreden Klanten", "icon": "HEART"}
        ]
    });

    static ref ABOUT_BLOCK: Value = json!({
        "__component": ABOUT_COMPONENT,
        "id": 2,
        "heading": "Over ons",
        "subheading": "Specialist in reizen naar Turkije",
        "content": "<p>Wij reizen al jaren door Turkije en kennen de mooiste plekken buiten de gebaande paden.</p>",
        "badge": {"text": "Sinds 2010", "icon": "AWARD"},
        "highlights": [
            "Persoonlijk reisadvies",
            "Nederlandstalige begeleiding",
            "Lid van SGR en Calamiteitenfonds"
        ]
    });

    static ref GLOBAL_SETTINGS: Value = json!({
        "id": 1,
        "documentId": "static-global",
        "attributes": {
            "siteName": "Turkije Reizen",
            "siteDescription": "Rondreizen, citytrips en strandvakanties in Turkije.",
            "contactEmail": "info@turkijereizen.nl",
            "contactPhone": "+31 20 123 4567",
            "address": "Keizersgracht 1, 1015 CC Amsterdam",
            "socialLinks": [
                {"platform": "instagram", "url": "https://www.instagram.com/turkijereizen"},
                {"platform": "facebook", "url": "https://www.facebook.com/turkijereizen"}
            ]
        }
    });

    static ref LANDING_PAGE: Value = json!({
        "id": 1,
        "documentId": "static-landing-page",
        "attributes": {
            "title": "Home",
            "blocks": [HERO_BLOCK.clone(), ABOUT_BLOCK.clone()]
        }
    });
}

/// The hero block of the landing page.
pub fn static_hero_block() -> &'static Value {
    &HERO_BLOCK
}

pub fn static_about_block() -> &'static Value {
    &ABOUT_BLOCK
}

/// The `global` singleton as a normalized entity.
pub fn static_global_settings() -> &'static Value {
    &GLOBAL_SETTINGS
}

/// The landing page as a normalized entity with its `blocks` dynamic zone.
pub fn static_landing_page() -> &'static Value {
    &LANDING_PAGE
}
