//! Export command - write SEO files for static hosting

use std::{path::Path, time::Instant};

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use mary_seo::{ExportStats, export_all};

use super::load_config;

/// Run the export command.
pub fn run(config_path: &Path, output_dir: &Path) -> Result<ExportStats> {
    let start = Instant::now();

    tracing::info!(?config_path, ?output_dir, "Exporting SEO files");

    let config = load_config(config_path)?;
    let stats = export_all(&config, output_dir, Utc::now().date_naive())
        .wrap_err("Export failed")?;

    let duration = start.elapsed();
    tracing::info!(?stats, ?duration, "Export completed successfully");

    println!();
    println!("  Exported to {}", output_dir.display());
    if stats.robots {
        println!("  robots.txt");
    }
    println!("  sitemap.xml ({} URLs)", stats.sitemap_urls);
    println!(
        "  structured-data.json ({} documents)",
        stats.structured_documents
    );
    println!();

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_from_config_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(
            &config_path,
            "[site]\nbase_url = \"https://staging.example.com\"\n",
        )
        .expect("write config");

        let output = dir.path().join("public");
        let stats = run(&config_path, &output).expect("export");

        assert_eq!(stats.sitemap_urls, 4);
        let robots = std::fs::read_to_string(output.join("robots.txt")).expect("read");
        assert!(robots.contains("Host: https://staging.example.com"));
    }

    #[test]
    fn test_export_missing_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = run(&dir.path().join("missing.toml"), dir.path());
        assert!(result.is_err());
    }
}
