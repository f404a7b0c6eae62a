//! Command implementations.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use mary_core::SiteConfig;

pub mod check;
pub mod export;
pub mod serve;

/// Load the site configuration with environment overrides applied.
pub(crate) fn load_config(config_path: &Path) -> Result<SiteConfig> {
    SiteConfig::load_with_env(config_path).wrap_err_with(|| {
        format!(
            "Failed to load configuration from {}",
            config_path.display()
        )
    })
}
