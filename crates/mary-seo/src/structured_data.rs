//! schema.org structured data.
//!
//! Builds the JSON-LD documents embedded in the page head from the site
//! configuration.

use mary_core::SiteConfig;
use serde_json::{Map, Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// The structured-data documents the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredData {
    /// `Organization` with contact point and opening hours.
    Organization,
    /// `ProfessionalService`, the local-business view of the agency.
    LocalBusiness,
    /// `WebSite` with a site search action.
    Website,
}

impl StructuredData {
    /// All documents, in the order they are emitted.
    pub const ALL: [Self; 3] = [Self::Organization, Self::LocalBusiness, Self::Website];

    /// Stable identifier, used as the script element id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Organization => "ld-organization",
            Self::LocalBusiness => "ld-local-business",
            Self::Website => "ld-website",
        }
    }

    /// Build the JSON-LD document.
    pub fn to_value(self, config: &SiteConfig) -> Value {
        match self {
            Self::Organization => organization(config),
            Self::LocalBusiness => local_business(config),
            Self::Website => website(config),
        }
    }
}

fn postal_address(config: &SiteConfig) -> Value {
    let address = &config.contact.address;
    let mut value = json!({
        "@type": "PostalAddress",
        "streetAddress": address.street_address,
        "addressLocality": address.locality,
        "postalCode": address.postal_code,
        "addressCountry": address.country,
    });
    if let Some(region) = &address.region {
        value["addressRegion"] = json!(region);
    }
    value
}

fn geo(config: &SiteConfig) -> Value {
    json!({
        "@type": "GeoCoordinates",
        "latitude": config.contact.geo.latitude,
        "longitude": config.contact.geo.longitude,
    })
}

fn opening_hours(config: &SiteConfig) -> Value {
    let hours = &config.contact.opening_hours;
    json!({
        "@type": "OpeningHoursSpecification",
        "dayOfWeek": hours.days,
        "opens": hours.opens,
        "closes": hours.closes,
    })
}

/// `Organization` document.
pub fn organization(config: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": config.site.name,
        "alternateName": config.site.alternate_name,
        "url": config.base_url(),
        "logo": config.site.logo_url,
        "email": config.contact.email,
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": config.contact.telephone,
            "contactType": "customer service",
            "availableLanguage": config.contact.languages,
        },
        "address": postal_address(config),
        "geo": geo(config),
        "openingHoursSpecification": opening_hours(config),
        "sameAs": config.contact.same_as,
    })
}

/// `ProfessionalService` document.
pub fn local_business(config: &SiteConfig) -> Value {
    let area = &config.business.service_area;
    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ProfessionalService",
        "name": config.site.name,
        "alternateName": config.site.alternate_name,
        "url": config.base_url(),
        "logo": config.site.logo_url,
        "image": config.site.logo_url,
        "telephone": config.contact.telephone,
        "email": config.contact.email,
        "priceRange": config.business.price_range,
        "address": postal_address(config),
        "geo": geo(config),
        "serviceArea": {
            "@type": "GeoCircle",
            "geoMidpoint": {
                "@type": "GeoCoordinates",
                "latitude": area.latitude,
                "longitude": area.longitude,
            },
            "geoRadius": area.radius,
        },
        "openingHoursSpecification": opening_hours(config),
        "sameAs": config.contact.same_as,
    });

    if let Some(rating) = &config.business.aggregate_rating {
        value["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": rating.rating_value,
            "ratingCount": rating.rating_count,
        });
    }

    value
}

/// `WebSite` document.
pub fn website(config: &SiteConfig) -> Value {
    let url = config.base_url();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": config.site.name,
        "alternateName": config.site.alternate_name,
        "url": url,
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{url}/search?q={{search_term_string}}"),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

/// All documents keyed by id, for export.
pub fn bundle(config: &SiteConfig) -> Value {
    let map: Map<String, Value> = StructuredData::ALL
        .iter()
        .map(|kind| (kind.id().to_string(), kind.to_value(config)))
        .collect();
    Value::Object(map)
}

/// Serialize a document for a `<script type="application/ld+json">` body.
///
/// `</` is escaped so configured text can never close the script element.
pub fn script_body(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
