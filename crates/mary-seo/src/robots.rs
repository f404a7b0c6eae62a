//! Robots.txt generation.
//!
//! Generates the robots.txt file for search engine crawlers.

use std::{fmt::Write as _, fs, path::Path};

use mary_core::SiteConfig;
use thiserror::Error;
use tracing::info;

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: SiteConfig,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Render robots.txt, or `None` when disabled.
    pub fn render(&self) -> Option<String> {
        if !self.config.robots.enabled {
            return None;
        }

        let mut out = String::new();
        for (index, rule) in self.config.robots.rules.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "User-agent: {}", rule.user_agent);
            for path in &rule.allow {
                let _ = writeln!(out, "Allow: {path}");
            }
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
        }

        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "Sitemap: {}", self.config.url_for("sitemap.xml"));
        let _ = writeln!(out, "Host: {}", self.config.base_url());
        Some(out)
    }

    /// Write robots.txt into `output_dir`. Returns whether a file was written.
    pub fn generate(&self, output_dir: &Path) -> Result<bool> {
        let Some(content) = self.render() else {
            return Ok(false);
        };

        info!("generating robots.txt");
        fs::write(output_dir.join("robots.txt"), content)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use mary_core::config::RobotsRule;

    use super::*;

    #[test]
    fn test_default_rules() {
        let text = RobotsGenerator::new(SiteConfig::default())
            .render()
            .expect("enabled by default");

        let expected = "\
User-agent: *
Allow: /
Disallow: /admin/
Disallow: /api/
Disallow: /private/
Disallow: /_next/
Disallow: /static/

User-agent: GPTBot
Disallow: /

User-agent: Google-Extended
Disallow: /

Sitemap: https://marybusinessgraphic.com/sitemap.xml
Host: https://marybusinessgraphic.com
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_rules() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.com/".to_string();
        config.robots.rules = vec![RobotsRule::new("Bingbot").disallow("/drafts/")];

        let text = RobotsGenerator::new(config).render().unwrap();
        assert!(text.starts_with("User-agent: Bingbot\nDisallow: /drafts/\n"));
        assert!(text.contains("Sitemap: https://example.com/sitemap.xml\n"));
        assert!(text.ends_with("Host: https://example.com\n"));
    }

    #[test]
    fn test_disabled() {
        let mut config = SiteConfig::default();
        config.robots.enabled = false;
        let generator = RobotsGenerator::new(config);
        assert!(generator.render().is_none());

        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(!generator.generate(dir.path()).expect("generate"));
        assert!(!dir.path().join("robots.txt").exists());
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let written = RobotsGenerator::new(SiteConfig::default())
            .generate(dir.path())
            .expect("generate");
        assert!(written);
        let content = std::fs::read_to_string(dir.path().join("robots.txt")).expect("read");
        assert!(content.contains("User-agent: GPTBot"));
    }
}
