//! Site configuration management.
//!
//! Every section has the agency's values as defaults, so an empty file is
//! a valid configuration and a `site.toml` only needs to list overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    hero::HeroProps,
    navigation::{self, NavItem},
};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Identity and page metadata.
    #[serde(default)]
    pub site: SiteInfo,

    /// Contact details shown in the drawer and emitted as structured data.
    #[serde(default)]
    pub contact: ContactInfo,

    /// Local business details for structured data.
    #[serde(default)]
    pub business: BusinessInfo,

    /// Header behaviour.
    #[serde(default)]
    pub header: HeaderConfig,

    /// Top-level navigation, in display order.
    #[serde(default = "navigation::default_navigation")]
    pub navigation: Vec<NavItem>,

    /// Home page hero.
    #[serde(default)]
    pub hero: HeroProps,

    /// Crawler rules.
    #[serde(default)]
    pub robots: RobotsConfig,

    /// Sitemap entries.
    #[serde(default = "default_sitemap")]
    pub sitemap: Vec<SitemapEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            contact: ContactInfo::default(),
            business: BusinessInfo::default(),
            header: HeaderConfig::default(),
            navigation: navigation::default_navigation(),
            hero: HeroProps::default(),
            robots: RobotsConfig::default(),
            sitemap: default_sitemap(),
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteInfo {
    /// Organisation name.
    pub name: String,

    /// Secondary name used in structured data.
    pub alternate_name: String,

    /// Short brand mark rendered as the logo.
    pub logo_text: String,

    /// Line under the logo mark.
    pub tagline: String,

    /// Base URL (e.g., "https://example.com"), no trailing slash.
    pub base_url: String,

    /// Absolute logo URL for structured data.
    pub logo_url: String,

    /// Document title.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Meta keywords.
    pub keywords: Vec<String>,

    /// Document language.
    pub language: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Mary Agency".to_string(),
            alternate_name: "Mary Business Graphic".to_string(),
            logo_text: "mary".to_string(),
            tagline: "BUSINESS GRAPHIC".to_string(),
            base_url: "https://marybusinessgraphic.com".to_string(),
            logo_url: "https://marybusinessgraphic.com/logo.png".to_string(),
            title: "Mary Agency - Premium Communication Agency".to_string(),
            description: "Premium communication agency specializing in digital creation, film \
                          production, and web development. Luxury aesthetic meets exceptional \
                          results."
                .to_string(),
            keywords: [
                "communication agency",
                "digital creation",
                "film production",
                "web development",
                "luxury design",
            ]
            .map(String::from)
            .to_vec(),
            language: "fr".to_string(),
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostalAddress {
    pub street_address: String,
    pub locality: String,
    pub region: Option<String>,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 code.
    pub country: String,
    /// Country as displayed to visitors.
    pub country_name: String,
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            street_address: "231 Rue Saint-Honoré".to_string(),
            locality: "Paris".to_string(),
            region: Some("Île-de-France".to_string()),
            postal_code: "75001".to_string(),
            country: "FR".to_string(),
            country_name: "France".to_string(),
        }
    }
}

impl PostalAddress {
    /// Display lines, e.g. `["231 Rue Saint-Honoré", "75001 Paris, France"]`.
    pub fn lines(&self) -> [String; 2] {
        [
            self.street_address.clone(),
            format!(
                "{} {}, {}",
                self.postal_code, self.locality, self.country_name
            ),
        ]
    }
}

/// Geographic coordinates, kept as text so they round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoCoordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Default for GeoCoordinates {
    fn default() -> Self {
        Self {
            latitude: "48.8651".to_string(),
            longitude: "2.3297".to_string(),
        }
    }
}

/// Weekly opening hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OpeningHours {
    pub days: Vec<String>,
    pub opens: String,
    pub closes: String,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .map(String::from)
                .to_vec(),
            opens: "09:00".to_string(),
            closes: "18:00".to_string(),
        }
    }
}

/// Contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactInfo {
    /// Telephone in structured-data form.
    pub telephone: String,
    /// Telephone as displayed.
    pub telephone_display: String,
    pub email: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub opening_hours: OpeningHours,
    /// Social profile URLs.
    pub same_as: Vec<String>,
    /// Languages spoken by customer service.
    pub languages: Vec<String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            telephone: "+33-6-58-77-33-30".to_string(),
            telephone_display: "+33 6 58 77 33 30".to_string(),
            email: "contact@marybusinessgraphic.com".to_string(),
            address: PostalAddress::default(),
            geo: GeoCoordinates::default(),
            opening_hours: OpeningHours::default(),
            same_as: [
                "https://www.instagram.com/maryagency",
                "https://www.linkedin.com/company/maryagency",
                "https://www.facebook.com/maryagency",
                "https://twitter.com/maryagency",
            ]
            .map(String::from)
            .to_vec(),
            languages: vec!["French".to_string(), "English".to_string()],
        }
    }
}

impl ContactInfo {
    /// `tel:` link target.
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .telephone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// Circular service area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceArea {
    pub latitude: String,
    pub longitude: String,
    /// Radius in metres.
    pub radius: String,
}

impl Default for ServiceArea {
    fn default() -> Self {
        Self {
            latitude: "48.8566".to_string(),
            longitude: "2.3522".to_string(),
            radius: "50000".to_string(),
        }
    }
}

/// Review aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateRating {
    pub rating_value: String,
    pub rating_count: String,
}

/// Local business details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BusinessInfo {
    pub price_range: String,
    pub service_area: ServiceArea,
    pub aggregate_rating: Option<AggregateRating>,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            price_range: "€€€".to_string(),
            service_area: ServiceArea::default(),
            aggregate_rating: None,
        }
    }
}

/// Header behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderConfig {
    /// Whether the header may stay transparent over the first section.
    pub transparent: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { transparent: true }
    }
}

/// One `User-agent` group of robots.txt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RobotsRule {
    pub user_agent: String,
    #[serde(default)]
    pub allow: Vec<String>,
    #[serde(default)]
    pub disallow: Vec<String>,
}

impl RobotsRule {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            allow: Vec::new(),
            disallow: Vec::new(),
        }
    }

    pub fn allow(mut self, path: impl Into<String>) -> Self {
        self.allow.push(path.into());
        self
    }

    pub fn disallow(mut self, path: impl Into<String>) -> Self {
        self.disallow.push(path.into());
        self
    }
}

/// Robots.txt configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RobotsConfig {
    pub enabled: bool,
    pub rules: Vec<RobotsRule>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: vec![
                RobotsRule::new("*")
                    .allow("/")
                    .disallow("/admin/")
                    .disallow("/api/")
                    .disallow("/private/")
                    .disallow("/_next/")
                    .disallow("/static/"),
                RobotsRule::new("GPTBot").disallow("/"),
                RobotsRule::new("Google-Extended").disallow("/"),
            ],
        }
    }
}

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A sitemap entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SitemapEntry {
    /// Site-relative path.
    pub path: String,
    pub change_freq: ChangeFreq,
    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

impl SitemapEntry {
    pub fn new(path: impl Into<String>, change_freq: ChangeFreq, priority: f32) -> Self {
        Self {
            path: path.into(),
            change_freq,
            priority,
        }
    }
}

fn default_sitemap() -> Vec<SitemapEntry> {
    vec![
        SitemapEntry::new("/", ChangeFreq::Yearly, 1.0),
        SitemapEntry::new("/agence", ChangeFreq::Monthly, 0.8),
        SitemapEntry::new("/projets", ChangeFreq::Weekly, 0.9),
        SitemapEntry::new("/contact", ChangeFreq::Monthly, 0.7),
    ]
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `MARY__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("MARY").separator("__"))
            .build()?;

        let config: SiteConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(CoreError::config(format!(
                "site.base_url must be an absolute http(s) URL: {}",
                self.site.base_url
            )));
        }

        // Ensure base_url doesn't have trailing slash
        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        if self.hero.title.trim().is_empty() {
            return Err(CoreError::config("hero.title cannot be empty"));
        }

        navigation::validate(&self.navigation)?;

        for entry in &self.sitemap {
            if !(0.0..=1.0).contains(&entry.priority) {
                return Err(CoreError::config(format!(
                    "sitemap priority for {} must be between 0.0 and 1.0",
                    entry.path
                )));
            }
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.base_url().to_string();
        }
        format!("{}/{path}", self.base_url())
    }
}
