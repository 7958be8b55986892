//! Site-wide settings mapping (footer, contact details).

use serde::Serialize;
use serde_json::Value;

use crate::normalize::json_path::{array_at, string_at};

pub const DEFAULT_SITE_NAME: &str = "Turkije Reizen";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Rondreizen, citytrips en strandvakanties in Turkije.";
pub const DEFAULT_CONTACT_EMAIL: &str = "info@turkijereizen.nl";
pub const DEFAULT_CONTACT_PHONE: &str = "+31 20 123 4567";
pub const DEFAULT_ADDRESS: &str = "Keizersgracht 1, 1015 CC Amsterdam";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkProps {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettingsProps {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub social_links: Vec<SocialLinkProps>,
    pub copyright: String,
}

/// Map the attributes of the `global` singleton.
pub fn map_global_settings(attributes: &Value) -> GlobalSettingsProps {
    let site_name = string_at(attributes, "siteName").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());

    let social_links = array_at(attributes, "socialLinks")
        .iter()
        .filter_map(|link| {
            Some(SocialLinkProps {
                platform: string_at(link, "platform")?.to_lowercase(),
                url: string_at(link, "url")?,
            })
        })
        .collect();

    GlobalSettingsProps {
        site_description: string_at(attributes, "siteDescription")
            .unwrap_or_else(|| DEFAULT_SITE_DESCRIPTION.to_string()),
        contact_email: string_at(attributes, "contactEmail")
            .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
        contact_phone: string_at(attributes, "contactPhone")
            .unwrap_or_else(|| DEFAULT_CONTACT_PHONE.to_string()),
        address: string_at(attributes, "address").unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
        social_links,
        copyright: string_at(attributes, "footer.copyright")
            .unwrap_or_else(|| format!("© {}. Alle rechten voorbehouden.", site_name)),
        site_name,
    }
}
