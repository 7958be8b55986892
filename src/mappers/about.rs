//! About section mapping.

use serde::Serialize;
use serde_json::Value;

use crate::mappers::icon::{icon_for, IconName};
use crate::mappers::media::{image_props_or, ImageFormat, ImageProps};
use crate::mappers::text::plain_text;
use crate::normalize::json_path::{array_at, string_at};

pub const DEFAULT_ABOUT_HEADING: &str = "Over ons";
pub const DEFAULT_ABOUT_SUBHEADING: &str = "Specialist in reizen naar Turkije";
pub const DEFAULT_ABOUT_CONTENT: &str =
    "Wij kennen Turkije als onze broekzak en stellen reizen samen met lokale gidsen, \
     kleinschalige hotels en persoonlijke begeleiding.";
pub const FALLBACK_ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1524231757912-21f4fe3a7200?w=1200&q=80";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProps {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSectionProps {
    pub heading: String,
    pub subheading: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeProps>,
    pub image: ImageProps,
    pub highlights: Vec<String>,
}

pub fn default_highlights() -> Vec<String> {
    vec![
        "Persoonlijk reisadvies".to_string(),
        "Nederlandstalige begeleiding".to_string(),
        "Lid van SGR en Calamiteitenfonds".to_string(),
    ]
}

pub fn fallback_about_image() -> ImageProps {
    ImageProps {
        url: FALLBACK_ABOUT_IMAGE.to_string(),
        alt: "Uitzicht over Istanbul".to_string(),
        width: 1200,
        height: 800,
    }
}

/// Map an about block (`heading`, `subheading`, `content`, `badge`, `image`,
/// `highlights`) to view props. The image prefers the medium rendition.
pub fn map_about_section(block: &Value) -> AboutSectionProps {
    let mut highlights: Vec<String> = array_at(block, "highlights")
        .iter()
        .filter_map(|h| string_at(h, "").or_else(|| string_at(h, "text")))
        .collect();
    if highlights.is_empty() {
        highlights = default_highlights();
    }

    AboutSectionProps {
        heading: string_at(block, "heading").unwrap_or_else(|| DEFAULT_ABOUT_HEADING.to_string()),
        subheading: string_at(block, "subheading")
            .unwrap_or_else(|| DEFAULT_ABOUT_SUBHEADING.to_string()),
        content: block
            .get("content")
            .and_then(plain_text)
            .unwrap_or_else(|| DEFAULT_ABOUT_CONTENT.to_string()),
        badge: block.get("badge").and_then(map_badge),
        image: image_props_or(block.get("image"), ImageFormat::Medium, &fallback_about_image()),
        highlights,
    }
}

/// A badge needs text; an unknown icon drops only the icon.
fn map_badge(badge: &Value) -> Option<BadgeProps> {
    let text = string_at(badge, "text")?;
    Some(BadgeProps {
        text,
        icon: string_at(badge, "icon").and_then(|i| icon_for(&i)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_block_is_fully_defaulted() {
        let props = map_about_section(&json!({}));
        assert_eq!(props.heading, DEFAULT_ABOUT_HEADING);
        assert_eq!(props.content, DEFAULT_ABOUT_CONTENT);
        assert_eq!(props.badge, None);
        assert_eq!(props.image, fallback_about_image());
        assert_eq!(props.highlights, default_highlights());

        let serialized = serde_json::to_value(&props).unwrap();
        assert!(serialized.get("badge").is_none());
    }

    #[test]
    fn test_badge_icon_validation() {
        let valid = map_about_section(&json!({"badge": {"text": "Sinds 2008", "icon": "AWARD"}}));
        assert_eq!(
            valid.badge,
            Some(BadgeProps {
                text: "Sinds 2008".to_string(),
                icon: Some(IconName::Award)
            })
        );

        let invalid = map_about_section(&json!({"badge": {"text": "Sinds 2008", "icon": "TROPHY"}}));
        assert_eq!(invalid.badge.as_ref().unwrap().icon, None);
        let serialized = serde_json::to_value(&invalid).unwrap();
        assert!(serialized["badge"].get("icon").is_none());

        let no_text = map_about_section(&json!({"badge": {"icon": "AWARD"}}));
        assert_eq!(no_text.badge, None);
    }

    #[test]
    fn test_image_medium_then_original() {
        let with_medium = map_about_section(&json!({"image": {
            "url": "/uploads/team.jpg",
            "alternativeText": "Ons team",
            "width": 2000, "height": 1333,
            "formats": {"medium": {"url": "/uploads/medium_team.jpg", "width": 750, "height": 500}}
        }}));
        assert_eq!(with_medium.image.url, "/uploads/medium_team.jpg");
        assert_eq!(with_medium.image.alt, "Ons team");
        assert_eq!(with_medium.image.width, 750);

        let original_only = map_about_section(&json!({"image": {"data": {"attributes": {
            "url": "/uploads/team.jpg", "width": 2000, "height": 1333
        }}}}));
        assert_eq!(original_only.image.url, "/uploads/team.jpg");
        assert_eq!(original_only.image.alt, fallback_about_image().alt);
    }

    #[test]
    fn test_content_and_highlights() {
        let props = map_about_section(&json!({
            "content": "<p>Al 15 jaar&nbsp;actief</p>",
            "highlights": ["Kleine groepen", {"text": "Lokale gidsen"}, {"other": 1}]
        }));
        assert_eq!(props.content, "Al 15 jaar actief");
        assert_eq!(props.highlights, vec!["Kleine groepen", "Lokale gidsen"]);
    }
}
