//! Writes every SEO file for a deployment.

use std::{fs, path::Path};

use chrono::NaiveDate;
use mary_core::SiteConfig;
use thiserror::Error;
use tracing::info;

use crate::{
    robots::{RobotsError, RobotsGenerator},
    sitemap::{SitemapError, SitemapGenerator},
    structured_data,
};

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Robots(#[from] RobotsError),

    #[error(transparent)]
    Sitemap(#[from] SitemapError),

    /// JSON encoding error.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What an export produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub robots: bool,
    pub sitemap_urls: usize,
    pub structured_documents: usize,
}

/// Write robots.txt, sitemap.xml and structured-data.json into `output_dir`.
pub fn export_all(
    config: &SiteConfig,
    output_dir: &Path,
    lastmod: NaiveDate,
) -> Result<ExportStats, ExportError> {
    fs::create_dir_all(output_dir)?;

    let robots = RobotsGenerator::new(config.clone()).generate(output_dir)?;
    SitemapGenerator::new(config.clone()).write(output_dir, lastmod)?;

    let bundle = structured_data::bundle(config);
    let structured_documents = bundle.as_object().map_or(0, |docs| docs.len());
    fs::write(
        output_dir.join("structured-data.json"),
        serde_json::to_string_pretty(&bundle)?,
    )?;

    let stats = ExportStats {
        robots,
        sitemap_urls: config.sitemap.len(),
        structured_documents,
    };
    info!(?stats, output = %output_dir.display(), "exported SEO files");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_all() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("public");
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");

        let stats = export_all(&SiteConfig::default(), &output, date).expect("export");

        assert_eq!(
            stats,
            ExportStats {
                robots: true,
                sitemap_urls: 4,
                structured_documents: 3,
            }
        );
        assert!(output.join("robots.txt").exists());
        assert!(output.join("sitemap.xml").exists());

        let json = std::fs::read_to_string(output.join("structured-data.json")).expect("read");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["ld-website"]["@type"], "WebSite");
    }

    #[test]
    fn test_export_without_robots() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = SiteConfig::default();
        config.robots.enabled = false;
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");

        let stats = export_all(&config, dir.path(), date).expect("export");
        assert!(!stats.robots);
        assert!(!dir.path().join("robots.txt").exists());
    }
}
