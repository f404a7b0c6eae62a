//! End-to-end tests against the shipped `site.toml`.

use std::path::Path;

use chrono::NaiveDate;
use mary_core::{SiteConfig, navigation};
use mary_seo::{RobotsGenerator, SitemapGenerator, StructuredData, export_all, script_body};

fn shipped_config() -> Option<SiteConfig> {
    let config_path = Path::new("../../site.toml");
    if !config_path.exists() {
        // Skip if running from different working directory
        return None;
    }
    Some(SiteConfig::load(config_path).expect("site.toml should load"))
}

#[test]
fn test_shipped_config_loads() {
    let Some(config) = shipped_config() else {
        return;
    };

    assert_eq!(config.site.name, "Mary Agency");
    assert_eq!(config.site.language, "fr");
    assert!(config.header.transparent);
    assert_eq!(navigation::active_index(&config.navigation), Some(0));
    assert_eq!(config.navigation[1].label, "AGENCE");
}

#[test]
fn test_shipped_config_env_layering() {
    let config_path = Path::new("../../site.toml");
    if !config_path.exists() {
        return;
    }

    let config = SiteConfig::load_with_env(config_path).expect("site.toml should load");
    assert_eq!(config.navigation.len(), 4);
}

#[test]
fn test_shipped_config_seo_output() {
    let Some(config) = shipped_config() else {
        return;
    };

    let robots = RobotsGenerator::new(config.clone()).render().expect("robots enabled");
    assert!(robots.contains("User-agent: GPTBot\nDisallow: /\n"));
    assert!(robots.contains("Sitemap: https://marybusinessgraphic.com/sitemap.xml"));

    let date = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
    let sitemap = SitemapGenerator::new(config.clone()).generate(date);
    assert_eq!(sitemap.matches("<url>").count(), 4);

    for kind in StructuredData::ALL {
        let body = script_body(&kind.to_value(&config));
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid JSON-LD");
        assert_eq!(parsed["@context"], "https://schema.org");
    }
}

#[test]
fn test_shipped_config_export() {
    let Some(config) = shipped_config() else {
        return;
    };

    let dir = tempfile::tempdir().expect("create temp dir");
    let date = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
    let stats = export_all(&config, dir.path(), date).expect("export");
    assert!(stats.robots);
    assert_eq!(stats.structured_documents, 3);
}
