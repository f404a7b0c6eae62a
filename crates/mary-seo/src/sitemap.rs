//! Sitemap generation.
//!
//! Generates the XML sitemap for the site's static pages.

use std::{fs, path::Path};

use chrono::NaiveDate;
use mary_core::{SiteConfig, SitemapEntry};
use thiserror::Error;
use tracing::debug;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: SiteConfig,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Generate sitemap XML with every entry last modified on `lastmod`.
    pub fn generate(&self, lastmod: NaiveDate) -> String {
        debug!(count = self.config.sitemap.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for entry in &self.config.sitemap {
            xml.push_str(&self.entry_to_xml(entry, lastmod));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap.xml into `output_dir`.
    pub fn write(&self, output_dir: &Path, lastmod: NaiveDate) -> Result<()> {
        fs::write(output_dir.join("sitemap.xml"), self.generate(lastmod))?;
        Ok(())
    }

    fn entry_to_xml(&self, entry: &SitemapEntry, lastmod: NaiveDate) -> String {
        let mut xml = String::from("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&self.config.url_for(&entry.path))
        ));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            lastmod.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_freq.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
