//! Mary Core Library
//!
//! Browser-free core of the Mary Agency site: design tokens, navigation,
//! header and drawer state, the page scroll lock, and the hero animation
//! choreography, plus site configuration and error handling.
//!
//! Everything here is plain data and pure functions so it can be tested
//! without a rendering environment; `mary-ui` binds it to the DOM.

pub mod burger;
pub mod config;
pub mod drawer;
pub mod easing;
pub mod error;
pub mod header;
pub mod hero;
pub mod navigation;
pub mod scroll_lock;
pub mod timeline;
pub mod tokens;

pub use burger::BurgerSize;
pub use config::{ChangeFreq, SiteConfig, SitemapEntry};
pub use drawer::{DrawerEffects, DrawerTransition};
pub use easing::Easing;
pub use error::{CoreError, Result};
pub use header::{CloseReason, HeaderBackground, HeaderInput, HeaderState, HeaderVisual, TextTone};
pub use hero::{HeroProps, HeroTarget};
pub use navigation::NavItem;
pub use scroll_lock::{ScrollLock, ScrollLockGuard, ScrollLockTarget};
pub use timeline::{Frame, Playback, Pose, Property, Timeline, Track, Tween};
