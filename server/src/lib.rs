//! Mary Server Library
//!
//! Serves the compiled site and its SEO files, and exports those files for
//! static hosting.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, export, check)
//! - [`routes`] - HTTP router
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mary_server::cmd;
//!
//! // Write robots.txt, sitemap.xml and structured-data.json
//! cmd::export::run(Path::new("site.toml"), Path::new("public")).unwrap();
//! ```

pub mod cmd;
pub mod routes;

pub use mary_core::SiteConfig;
pub use mary_seo::ExportStats;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
