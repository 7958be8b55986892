//! Hero section mapping.
//!
//! Turns a hero block into `HeroSectionProps`. Every field has a Dutch
//! default so an empty or malformed block still renders.

use serde::Serialize;
use serde_json::Value;

use crate::mappers::icon::{icon_for, IconName};
use crate::mappers::media::{image_props_or, ImageFormat, ImageProps};
use crate::mappers::text::plain_text;
use crate::normalize::json_path::{array_at, string_at, value_to_bool};

pub const DEFAULT_HERO_HEADING: &str = "Ontdek het echte Turkije";
pub const DEFAULT_HERO_SUBHEADING: &str = "Rondreizen, citytrips en strandvakanties";
pub const DEFAULT_HERO_DESCRIPTION: &str =
    "Van de feeënschoorstenen van Cappadocië tot de bazaars van Istanbul: wij stellen jouw reis samen.";
pub const FALLBACK_HERO_IMAGE: &str = "/images/hero-cappadocia.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProps {
    pub label: String,
    pub href: String,
    pub is_external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatProps {
    pub value: String,
    pub label: String,
    /// Omitted entirely when the CMS value is not a known icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionProps {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    pub background_image: ImageProps,
    pub primary_cta: LinkProps,
    pub secondary_cta: LinkProps,
    pub stats: Vec<StatProps>,
}

impl LinkProps {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            is_external: false,
        }
    }
}

impl StatProps {
    fn new(value: &str, label: &str, icon: IconName) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            icon: Some(icon),
        }
    }
}

pub fn default_primary_cta() -> LinkProps {
    LinkProps::new("Bekijk alle reizen", "/reizen")
}

pub fn default_secondary_cta() -> LinkProps {
    LinkProps::new("Neem contact op", "/contact")
}

/// Stats shown when the block has none.
pub fn default_stats() -> Vec<StatProps> {
    vec![
        StatProps::new("5 Regio's", "Turkije", IconName::MapPin),
        StatProps::new("12+ Reizen", "Beschikbaar", IconName::Plane),
        StatProps::new("100%", "Tevreden Klanten", IconName::Heart),
    ]
}

pub fn fallback_hero_image() -> ImageProps {
    ImageProps {
        url: FALLBACK_HERO_IMAGE.to_string(),
        alt: DEFAULT_HERO_HEADING.to_string(),
        width: 1920,
        height: 1080,
    }
}

/// Map a hero block (`heading`, `subheading`, `description`, `background`,
/// `links`, `stats`) to view props.
pub fn map_hero_section(block: &Value) -> HeroSectionProps {
    let heading = string_at(block, "heading").unwrap_or_else(|| DEFAULT_HERO_HEADING.to_string());

    let mut fallback_image = fallback_hero_image();
    fallback_image.alt = heading.clone();
    let background = block.get("background").or_else(|| block.get("backgroundImage"));
    let background_image = image_props_or(background, ImageFormat::Original, &fallback_image);

    let links = parse_links(array_at(block, "links"));
    let (primary, secondary) = classify_links(&links);

    let mut stats = parse_stats(array_at(block, "stats"));
    if stats.is_empty() {
        stats = default_stats();
    }

    HeroSectionProps {
        subheading: string_at(block, "subheading")
            .unwrap_or_else(|| DEFAULT_HERO_SUBHEADING.to_string()),
        description: block
            .get("description")
            .and_then(plain_text)
            .unwrap_or_else(|| DEFAULT_HERO_DESCRIPTION.to_string()),
        background_image,
        primary_cta: primary.map(|l| l.props.clone()).unwrap_or_else(default_primary_cta),
        secondary_cta: secondary.map(|l| l.props.clone()).unwrap_or_else(default_secondary_cta),
        stats,
        heading,
    }
}

/// Link as stored in the CMS link component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsLink {
    pub props: LinkProps,
    pub is_button: bool,
    /// `PRIMARY`, `SECONDARY` or `TERTIARY`, upper-cased.
    pub kind: Option<String>,
}

/// Links with an `href`; label falls back to the href.
pub fn parse_links(values: &[Value]) -> Vec<CmsLink> {
    values
        .iter()
        .filter_map(|value| {
            let href = string_at(value, "href").or_else(|| string_at(value, "url"))?;
            let label = string_at(value, "text")
                .or_else(|| string_at(value, "label"))
                .unwrap_or_else(|| href.clone());
            Some(CmsLink {
                props: LinkProps {
                    label,
                    is_external: value
                        .get("isExternal")
                        .and_then(value_to_bool)
                        .unwrap_or_else(|| href.starts_with("http")),
                    href,
                },
                is_button: value
                    .get("isButtonLink")
                    .and_then(value_to_bool)
                    .unwrap_or(false),
                kind: string_at(value, "type").map(|t| t.to_uppercase()),
            })
        })
        .collect()
}

/// Primary: first button link of kind `PRIMARY`, else the first link.
/// Secondary: first other link of kind `SECONDARY`/`TERTIARY`, else the first
/// link that is not the primary one.
pub fn classify_links(links: &[CmsLink]) -> (Option<&CmsLink>, Option<&CmsLink>) {
    let primary_index = links
        .iter()
        .position(|l| l.is_button && l.kind.as_deref() == Some("PRIMARY"))
        .or(if links.is_empty() { None } else { Some(0) });

    let secondary = links
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != primary_index)
        .find(|(_, l)| matches!(l.kind.as_deref(), Some("SECONDARY") | Some("TERTIARY")))
        .or_else(|| {
            links
                .iter()
                .enumerate()
                .find(|(i, _)| Some(*i) != primary_index)
        })
        .map(|(_, l)| l);

    (primary_index.and_then(|i| links.get(i)), secondary)
}

fn parse_stats(values: &[Value]) -> Vec<StatProps> {
    values
        .iter()
        .filter_map(|value| {
            let stat_value = string_at(value, "value");
            let label = string_at(value, "label");
            if stat_value.is_none() && label.is_none() {
                return None;
            }
            Some(StatProps {
                value: stat_value.unwrap_or_default(),
                label: label.unwrap_or_default(),
                icon: string_at(value, "icon").and_then(|i| icon_for(&i)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_block_is_fully_defaulted() {
        let props = map_hero_section(&json!({}));
        assert_eq!(props.heading, DEFAULT_HERO_HEADING);
        assert_eq!(props.subheading, DEFAULT_HERO_SUBHEADING);
        assert_eq!(props.description, DEFAULT_HERO_DESCRIPTION);
        assert_eq!(props.background_image.url, FALLBACK_HERO_IMAGE);
        assert_eq!(props.primary_cta, default_primary_cta());
        assert_eq!(props.secondary_cta, default_secondary_cta());
        assert_eq!(props.stats, default_stats());

        // Non-object input is tolerated too.
        assert_eq!(map_hero_section(&json!(null)), props);
    }

    #[test]
    fn test_zero_stats_get_dutch_defaults() {
        let props = map_hero_section(&json!({"heading": "Welkom", "stats": []}));
        let pairs: Vec<(&str, &str)> = props
            .stats
            .iter()
            .map(|s| (s.value.as_str(), s.label.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("5 Regio's", "Turkije"),
                ("12+ Reizen", "Beschikbaar"),
                ("100%", "Tevreden Klanten"),
            ]
        );
    }

    #[test]
    fn test_invalid_icon_omits_key() {
        let props = map_hero_section(&json!({
            "stats": [
                {"value": "20 jaar", "label": "Ervaring", "icon": "AWARD"},
                {"value": "4.9", "label": "Beoordeling", "icon": "ROCKET"}
            ]
        }));
        assert_eq!(props.stats.len(), 2);
        assert_eq!(props.stats[0].icon, Some(IconName::Award));
        assert_eq!(props.stats[1].icon, None);

        let serialized = serde_json::to_value(&props).unwrap();
        assert_eq!(serialized["stats"][0]["icon"], json!("award"));
        assert!(serialized["stats"][1].as_object().unwrap().get("icon").is_none());
    }

    #[test]
    fn test_description_is_plain_text() {
        let props = map_hero_section(&json!({
            "description": "<p>Zon &amp; zee in <strong>Antalya</strong> &euro;</p>"
        }));
        assert_eq!(props.description, "Zon & zee in Antalya &euro;");
    }

    #[test]
    fn test_background_nested_and_flattened() {
        let nested = map_hero_section(&json!({
            "heading": "Istanbul",
            "background": {"data": {"attributes": {
                "url": "/uploads/bosporus.jpg", "width": 3000, "height": 2000
            }}}
        }));
        assert_eq!(nested.background_image.url, "/uploads/bosporus.jpg");
        assert_eq!(nested.background_image.alt, "Istanbul");
        assert_eq!(nested.background_image.width, 3000);

        let flattened = map_hero_section(&json!({
            "background": {"id": 1, "documentId": "b", "url": "/uploads/kust.jpg", "alternativeText": "Kust"}
        }));
        assert_eq!(flattened.background_image.url, "/uploads/kust.jpg");
        assert_eq!(flattened.background_image.alt, "Kust");
        assert_eq!(flattened.background_image.height, 1080);
    }

    #[test]
    fn test_tagged_links() {
        let props = map_hero_section(&json!({
            "links": [
                {"text": "Lees meer", "href": "/over-ons", "type": "TERTIARY"},
                {"text": "Boek nu", "href": "/reizen", "isButtonLink": true, "type": "PRIMARY"},
                {"text": "Brochure", "href": "https://example.com/b.pdf", "type": "SECONDARY"}
            ]
        }));
        assert_eq!(props.primary_cta.label, "Boek nu");
        assert_eq!(props.secondary_cta.label, "Lees meer");
        assert!(!props.secondary_cta.is_external);
    }

    #[test]
    fn test_untagged_links_use_position() {
        let props = map_hero_section(&json!({
            "links": [
                {"label": "Reizen", "url": "/reizen"},
                {"label": "Blog", "url": "https://blog.example.com"},
                {"label": "Derde", "url": "/derde"}
            ]
        }));
        assert_eq!(props.primary_cta.href, "/reizen");
        assert_eq!(props.secondary_cta.href, "https://blog.example.com");
        assert!(props.secondary_cta.is_external);
    }

    #[test]
    fn test_primary_tag_requires_button() {
        let links = parse_links(&[
            json!({"text": "Eerste", "href": "/a"}),
            json!({"text": "Geen knop", "href": "/b", "type": "primary"}),
        ]);
        let (primary, secondary) = classify_links(&links);
        assert_eq!(primary.unwrap().props.href, "/a");
        assert_eq!(secondary.unwrap().props.href, "/b");
    }

    #[test]
    fn test_single_link_keeps_default_secondary() {
        let props = map_hero_section(&json!({
            "links": [{"text": "Boek", "href": "/boeken"}, {"text": "kapot"}]
        }));
        assert_eq!(props.primary_cta.href, "/boeken");
        assert_eq!(props.secondary_cta, default_secondary_cta());
    }
}
