//! Mary UI Components
//!
//! Leptos components for the Mary Agency frontend. State and
//! choreography live in `mary-core`; this crate binds them to the DOM.
//!
//! # Components
//!
//! ## Header
//! - [`Header`] - Fixed site header with desktop navigation
//! - [`BurgerButton`] - Two-bar menu toggle
//! - [`MobileDrawer`] - Off-canvas navigation panel
//! - [`Brand`] - Logo and tagline block
//!
//! ## Sections
//! - [`HeroSection`] - Full-screen hero with entrance animation and parallax
//!
//! ## SEO
//! - [`JsonLd`] - One JSON-LD document in the page head
//! - [`SiteStructuredData`] - Every JSON-LD document for the site
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use mary_core::{HeroProps, navigation};
//! use mary_ui::{Header, HeroSection};
//!
//! #[component]
//! fn Home() -> impl IntoView {
//!     view! {
//!         <Header items=navigation::default_navigation() />
//!         <HeroSection hero=HeroProps::default() />
//!     }
//! }
//! ```

pub mod burger;
pub mod dom;
pub mod drawer;
pub mod header;
pub mod hero;
pub mod raf;
pub mod seo;

pub use burger::BurgerButton;
pub use drawer::MobileDrawer;
pub use header::{Brand, Header};
pub use hero::HeroSection;
pub use raf::RafLoop;
pub use seo::{JsonLd, SiteStructuredData};
