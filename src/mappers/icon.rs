//! Icon enum mapping.
//!
//! The CMS stores icons as enumeration strings (`MAP_PIN`, `PLANE`, ...).
//! Presentation code receives an `IconName`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    MapPin,
    Plane,
    Heart,
    Star,
    Users,
    Globe,
    Calendar,
    Award,
    Shield,
    Compass,
    Sun,
    Camera,
    Mountain,
    Building,
}

/// Icon used by `map_icon` for unrecognized values.
pub const DEFAULT_ICON: IconName = IconName::Compass;

const ICON_TABLE: &[(&str, IconName)] = &[
    ("MAP_PIN", IconName::MapPin),
    ("PLANE", IconName::Plane),
    ("HEART", IconName::Heart),
    ("STAR", IconName::Star),
    ("USERS", IconName::Users),
    ("GLOBE", IconName::Globe),
    ("CALENDAR", IconName::Calendar),
    ("AWARD", IconName::Award),
    ("SHIELD", IconName::Shield),
    ("COMPASS", IconName::Compass),
    ("SUN", IconName::Sun),
    ("CAMERA", IconName::Camera),
    ("MOUNTAIN", IconName::Mountain),
    ("BUILDING", IconName::Building),
];

impl IconName {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::MapPin => "map-pin",
            IconName::Plane => "plane",
            IconName::Heart => "heart",
            IconName::Star => "star",
            IconName::Users => "users",
            IconName::Globe => "globe",
            IconName::Calendar => "calendar",
            IconName::Award => "award",
            IconName::Shield => "shield",
            IconName::Compass => "compass",
            IconName::Sun => "sun",
            IconName::Camera => "camera",
            IconName::Mountain => "mountain",
            IconName::Building => "building",
        }
    }
}

/// The icon for a CMS enum value, if the value is known. Case-insensitive.
pub fn icon_for(value: &str) -> Option<IconName> {
    let key = value.trim();
    ICON_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, icon)| *icon)
}

/// The icon for a CMS enum value, `DEFAULT_ICON` when unknown.
pub fn map_icon(value: &str) -> IconName {
    icon_for(value).unwrap_or(DEFAULT_ICON)
}

pub fn is_valid_icon(value: &str) -> bool {
    icon_for(value).is_some()
}
