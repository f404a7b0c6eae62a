//! Check command - validate configuration

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use mary_core::navigation;

use super::load_config;

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    println!("Checking configuration...");
    let config = match load_config(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            config
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            bail!("Configuration check failed");
        }
    };

    let mut warnings = Vec::new();
    if config.site.base_url.ends_with('/') {
        warnings.push("site.base_url has a trailing slash".to_string());
    }
    if navigation::active_index(&config.navigation).is_none() {
        warnings.push("no navigation item is marked active".to_string());
    }
    if config.hero.background_image.is_none() {
        warnings.push("hero.background_image not set, using the fallback gradient".to_string());
    }

    for warning in &warnings {
        println!("  ! {warning}");
    }

    if strict && !warnings.is_empty() {
        bail!("Check failed with {} warning(s) (strict mode)", warnings.len());
    }

    println!("\n✓ All checks passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("site.toml"), content).expect("write config");
        dir
    }

    #[test]
    fn test_check_valid_config() {
        let dir = write_config("[hero]\ntitle = \"Bonjour\"\nbackground_image = \"/hero.jpg\"\n");
        assert!(run(&dir.path().join("site.toml"), true).is_ok());
    }

    #[test]
    fn test_check_strict_warnings() {
        let dir = write_config("[site]\nname = \"Mary Agency\"\n");
        let path = dir.path().join("site.toml");
        assert!(run(&path, false).is_ok());
        assert!(run(&path, true).is_err());
    }

    #[test]
    fn test_check_invalid_config() {
        let dir = write_config("[site]\nbase_url = \"marybusinessgraphic.com\"\n");
        assert!(run(&dir.path().join("site.toml"), false).is_err());
    }
}
