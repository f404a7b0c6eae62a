//! Navigation items shared by the desktop header and the mobile drawer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A navigation item.
///
/// The destination is the item's identity; lists are keyed by it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Destination path.
    pub href: String,

    /// Whether this is the current page.
    #[serde(default)]
    pub active: bool,
}

impl NavItem {
    /// Create a new, inactive navigation item.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    /// Set this item as active.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// `aria-current` value for this item.
    pub fn aria_current(&self) -> Option<&'static str> {
        self.active.then_some("page")
    }
}

/// The agency's four top-level pages, home active.
pub fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("ACCUEIL", "/").with_active(true),
        NavItem::new("AGENCE", "/agence"),
        NavItem::new("PROJETS", "/projets"),
        NavItem::new("CONTACT", "/contact"),
    ]
}

/// Index of the active item, if any.
pub fn active_index(items: &[NavItem]) -> Option<usize> {
    items.iter().position(|item| item.active)
}

/// Copy of `items` with exactly the item whose destination equals `path`
/// marked active. No item is active when nothing matches.
pub fn mark_active(items: &[NavItem], path: &str) -> Vec<NavItem> {
    let path = normalize(path);
    items
        .iter()
        .map(|item| {
            let active = normalize(&item.href) == path;
            item.clone().with_active(active)
        })
        .collect()
}

/// Check the invariants a page shell must respect: at most one active
/// item, unique destinations, and destinations that are site paths or
/// in-page anchors.
pub fn validate(items: &[NavItem]) -> Result<()> {
    let active = items.iter().filter(|item| item.active).count();
    if active > 1 {
        return Err(CoreError::navigation(format!(
            "{active} items are marked active, expected at most one"
        )));
    }

    let mut seen = HashSet::new();
    for item in items {
        if !(item.href.starts_with('/') || item.href.starts_with('#')) {
            return Err(CoreError::navigation(format!(
                "destination of {:?} must start with '/' or '#': {}",
                item.label, item.href
            )));
        }
        if !seen.insert(item.href.as_str()) {
            return Err(CoreError::navigation(format!(
                "duplicate destination: {}",
                item.href
            )));
        }
    }

    Ok(())
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
