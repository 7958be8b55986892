//! Section content with the CMS-enabled switch applied.
//!
//! With the CMS enabled, sections come from the landing page and `global`
//! singletons; when the CMS is disabled or returns nothing usable, the
//! static records are mapped instead. Callers always get props.

use serde_json::Value;

use crate::accessors::entries::Collection;
use crate::config::ContentConfig;
use crate::fallback::content::{
    static_global_settings, static_landing_page, ABOUT_COMPONENT, HERO_COMPONENT,
};
use crate::fallback::trips::static_trip_entities;
use crate::logging::structured::LogContext;
use crate::mappers::about::{map_about_section, AboutSectionProps};
use crate::mappers::global::{map_global_settings, GlobalSettingsProps};
use crate::mappers::hero::{map_hero_section, HeroSectionProps};
use crate::mappers::media::absolute_media_url;
use crate::normalize::entity::CmsEntity;
use crate::query::builder::QueryOptions;
use crate::query::populate::Populate;
use crate::transport::client::CmsClient;
use crate::transport::http::{HttpTransport, ReqwestTransport};

pub const LANDING_PAGE_TYPE: &str = "landing-page";
pub const GLOBAL_TYPE: &str = "global";
pub const TRIPS_TYPE: &str = "trips";

/// Where a section's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cms,
    Static,
}

/// Query for the landing page with its dynamic zone populated.
pub fn landing_page_query() -> QueryOptions {
    QueryOptions::new().populate(Populate::paths([
        "blocks",
        "blocks.background",
        "blocks.links",
        "blocks.stats",
        "blocks.image",
        "blocks.badge",
    ]))
}

pub fn global_query() -> QueryOptions {
    QueryOptions::new().populate(Populate::paths(["socialLinks", "footer"]))
}

pub struct ContentProvider<T = ReqwestTransport> {
    config: ContentConfig,
    client: Option<CmsClient<T>>,
}

impl ContentProvider<ReqwestTransport> {
    /// Provider for `config`. A client that cannot be built is logged and
    /// the provider serves static content.
    pub fn from_config(config: ContentConfig) -> Self {
        if !config.cms_enabled {
            return Self::static_only(config);
        }
        match CmsClient::from_config(config.clone()) {
            Ok(client) => Self {
                config,
                client: Some(client),
            },
            Err(e) => {
                crate::log_error!(
                    LogContext::new(),
                    "CMS_CLIENT_UNAVAILABLE",
                    error = e.to_string(),
                    fallback = "static"
                );
                Self::static_only(config)
            }
        }
    }

    pub fn static_only(config: ContentConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }
}

impl<T: HttpTransport> ContentProvider<T> {
    pub fn with_client(client: CmsClient<T>) -> Self {
        Self {
            config: client.config().clone(),
            client: Some(client),
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    fn cms(&self) -> Option<&CmsClient<T>> {
        self.client.as_ref().filter(|_| self.config.cms_enabled)
    }

    pub fn hero_section(&self) -> HeroSectionProps {
        self.hero_section_with_origin().0
    }

    pub fn hero_section_with_origin(&self) -> (HeroSectionProps, Origin) {
        match self.landing_block(HERO_COMPONENT) {
            Some(block) => {
                let mut props = map_hero_section(&block);
                props.background_image.url =
                    absolute_media_url(&self.config.base_url, &props.background_image.url);
                (props, Origin::Cms)
            }
            None => (map_hero_section(static_block(HERO_COMPONENT)), Origin::Static),
        }
    }

    pub fn about_section(&self) -> AboutSectionProps {
        match self.landing_block(ABOUT_COMPONENT) {
            Some(block) => {
                let mut props = map_about_section(&block);
                props.image.url = absolute_media_url(&self.config.base_url, &props.image.url);
                props
            }
            None => map_about_section(static_block(ABOUT_COMPONENT)),
        }
    }

    pub fn global_settings(&self) -> GlobalSettingsProps {
        let entity = self
            .cms()
            .and_then(|cms| cms.get_singleton(GLOBAL_TYPE, &global_query()))
            .or_else(|| CmsEntity::from_value(static_global_settings()));
        match entity {
            Some(entity) => map_global_settings(&entity.attributes_value()),
            None => map_global_settings(&Value::Null),
        }
    }

    /// `component` block of the CMS landing page.
    fn landing_block(&self, component: &str) -> Option<Value> {
        let page = self
            .cms()?
            .get_singleton(LANDING_PAGE_TYPE, &landing_page_query())?;
        let block = find_block(page.attributes.get("blocks"), component).cloned();
        if block.is_none() {
            crate::log_info!(
                LogContext::new().for_content(LANDING_PAGE_TYPE),
                "CMS_BLOCK_MISSING",
                component = component,
                fallback = "static"
            );
        }
        block
    }

    /// Trips from the CMS, or the seeded catalogue when the CMS is disabled
    /// or unreachable. `options` only shape the CMS request.
    pub fn trips(&self, options: &QueryOptions) -> Collection {
        let from_cms = self
            .cms()
            .and_then(|cms| cms.try_get_many(TRIPS_TYPE, options).ok());
        match from_cms {
            Some(collection) => collection,
            None => Collection {
                data: static_trip_entities(),
                meta: None,
            },
        }
    }
}

/// First block tagged `component` in a dynamic zone.
fn find_block<'a>(blocks: Option<&'a Value>, component: &str) -> Option<&'a Value> {
    blocks?
        .as_array()?
        .iter()
        .find(|b| b.get("__component").and_then(|c| c.as_str()) == Some(component))
}

static MISSING_BLOCK: Value = Value::Null;

/// `component` block of the static landing page; a missing block maps to defaults.
fn static_block(component: &str) -> &'static Value {
    let blocks = static_landing_page()
        .get("attributes")
        .and_then(|a| a.get("blocks"));
    find_block(blocks, component).unwrap_or(&MISSING_BLOCK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::content::{static_about_block, static_hero_block};
    use crate::fallback::trips::{get_all_trips, get_trip_by_slug};
    use crate::logging::structured::tests::{capture_logs, logged};
    use crate::transport::client::tests::{client, MockTransport};
    use log::Level;
    use serde_json::json;

    fn landing_page() -> String {
        json!({
            "data": {
                "id": 1,
                "documentId": "lp",
                "title": "Home",
                "blocks": [
                    {
                        "__component": "blocks.about-section",
                        "heading": "Wie wij zijn"
                    },
                    {
                        "__component": "blocks.hero-section",
                        "heading": "Welkom in Turkije",
                        "background": {
                            "id": 3,
                            "documentId": "m3",
                            "url": "/uploads/hero_large.jpg",
                            "width": 2400,
                            "height": 1200
                        }
                    }
                ]
            }
        })
        .to_string()
    }

    #[test]
    fn test_static_only_provider() {
        let provider = ContentProvider::static_only(ContentConfig::default());
        let (hero, origin) = provider.hero_section_with_origin();
        assert_eq!(origin, Origin::Static);
        assert_eq!(hero, map_hero_section(static_hero_block()));
        assert_eq!(provider.about_section().heading, "Over ons");
        assert_eq!(provider.global_settings().site_name, "Turkije Reizen");
    }

    #[test]
    fn test_static_sections_come_from_the_landing_page() {
        assert_eq!(static_block(HERO_COMPONENT), static_hero_block());
        assert_eq!(static_block(ABOUT_COMPONENT), static_about_block());
        assert!(static_block("blocks.faq").is_null());
    }

    #[test]
    fn test_disabled_flag_serves_seeded_trips() {
        let config = ContentConfig::new("http://cms.test").with_cms_enabled(false);
        let provider = ContentProvider::with_client(CmsClient::with_transport(
            config,
            MockTransport::default(),
        ));
        let trips = provider.trips(&QueryOptions::new());
        assert_eq!(trips.len(), get_all_trips().len());
        assert_eq!(trips.data[0].slug(), Some("cappadocie-rondreis"));
        assert!(provider.client.as_ref().unwrap().transport().requests.lock().unwrap().is_empty());

        let static_only = ContentProvider::static_only(ContentConfig::default());
        assert_eq!(static_only.trips(&QueryOptions::new()), trips);
    }

    #[test]
    fn test_trips_from_cms() {
        let body = json!({"data": [{"id": 7, "documentId": "t7", "slug": "efeze-dagtocht"}]});
        let provider = ContentProvider::with_client(client(
            MockTransport::default()
                .respond(200, &body.to_string())
                .respond(200, r#"{"data": []}"#)
                .fail("connection refused"),
        ));
        let trips = provider.trips(&QueryOptions::new());
        assert_eq!(trips.len(), 1);
        assert_eq!(trips.data[0].slug(), Some("efeze-dagtocht"));

        let filtered = QueryOptions::new().filter("region.slug", "oost-turkije");
        assert!(provider.trips(&filtered).is_empty());

        assert_eq!(provider.trips(&QueryOptions::new()).len(), 3);
    }

    #[test]
    fn test_missing_block_is_logged() {
        capture_logs();
        let body = json!({"data": {"id": 1, "documentId": "lp", "blocks": []}}).to_string();
        let provider = ContentProvider::with_client(client(
            MockTransport::default().respond(200, &body),
        ));
        provider.hero_section();

        let info = logged(Level::Info, LANDING_PAGE_TYPE);
        assert!(info
            .iter()
            .any(|m| m.contains("CMS_BLOCK_MISSING component=\"blocks.hero-section\"")));
    }

    #[test]
    fn test_disabled_flag_skips_the_cms() {
        let config = ContentConfig::new("http://cms.test").with_cms_enabled(false);
        let provider = ContentProvider::with_client(CmsClient::with_transport(
            config,
            MockTransport::default(),
        ));
        assert_eq!(provider.hero_section_with_origin().1, Origin::Static);
        assert!(provider.client.as_ref().unwrap().transport().requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_hero_from_landing_page() {
        let provider = ContentProvider::with_client(client(
            MockTransport::default().respond(200, &landing_page()),
        ));
        let (hero, origin) = provider.hero_section_with_origin();
        assert_eq!(origin, Origin::Cms);
        assert_eq!(hero.heading, "Welkom in Turkije");
        assert_eq!(hero.background_image.url, "http://cms.test/uploads/hero_large.jpg");
        assert_eq!(hero.background_image.width, 2400);

        let request = provider.client.as_ref().unwrap().transport().last_request();
        assert!(request.url.starts_with("http://cms.test/api/landing-page?populate=blocks&"));
    }

    #[test]
    fn test_missing_block_falls_back() {
        let body = json!({"data": {"id": 1, "documentId": "lp", "blocks": []}}).to_string();
        let provider = ContentProvider::with_client(client(
            MockTransport::default().respond(200, &body),
        ));
        let about = provider.about_section();
        assert_eq!(about, map_about_section(static_about_block()));
    }

    #[test]
    fn test_unreachable_cms_falls_back() {
        let provider = ContentProvider::with_client(client(
            MockTransport::default()
                .fail("connection refused")
                .respond(500, ""),
        ));
        let hero = provider.hero_section();
        assert_eq!(hero, map_hero_section(static_hero_block()));
        assert_eq!(provider.global_settings().contact_email, "info@turkijereizen.nl");
    }

    #[test]
    fn test_global_from_cms() {
        let body = json!({
            "data": {
                "id": 1,
                "documentId": "g",
                "siteName": "Anatolië Reizen",
                "socialLinks": [{"platform": "Instagram", "url": "https://instagram.com/anatolie"}]
            }
        });
        let provider = ContentProvider::with_client(client(
            MockTransport::default().respond(200, &body.to_string()),
        ));
        let global = provider.global_settings();
        assert_eq!(global.site_name, "Anatolië Reizen");
        assert_eq!(global.social_links[0].platform, "instagram");
        assert_eq!(global.copyright, "© Anatolië Reizen. Alle rechten voorbehouden.");
    }

    #[test]
    fn test_static_trip_catalogue() {
        assert_eq!(get_all_trips().len(), 3);
        assert_eq!(
            get_trip_by_slug("cappadocie-rondreis").map(|t| t.region_slug.as_str()),
            Some("cappadocie")
        );
        assert!(get_trip_by_slug("nonexistent").is_none());
    }
}
