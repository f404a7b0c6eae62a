//! Mary SEO Library
//!
//! Search-engine facing output for the Mary Agency site.
//!
//! # Modules
//!
//! - [`structured_data`] - schema.org JSON-LD documents (Organization,
//!   ProfessionalService, WebSite)
//! - [`robots`] - robots.txt generation
//! - [`sitemap`] - XML sitemap generation
//! - [`export`] - Writes every SEO file into an output directory

pub mod export;
pub mod robots;
pub mod sitemap;
pub mod structured_data;

pub use export::{ExportError, ExportStats, export_all};
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
pub use structured_data::{StructuredData, script_body};
