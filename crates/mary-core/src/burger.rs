//! Burger toggle geometry.
//!
//! The two bars sit 8px above and below the centre when closed and cross
//! into an X when open.

use serde::{Deserialize, Serialize};

use crate::tokens;

/// Toggle size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurgerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BurgerSize {
    /// Container width and height.
    pub fn box_class(self) -> &'static str {
        match self {
            Self::Small => "w-5 h-4",
            Self::Medium => "w-7 h-6",
            Self::Large => "w-9 h-7",
        }
    }

    /// Bar width; matches the container.
    pub fn bar_width_class(self) -> &'static str {
        match self {
            Self::Small => "w-5",
            Self::Medium => "w-7",
            Self::Large => "w-9",
        }
    }

    /// Bar thickness.
    pub fn bar_height_class(self) -> &'static str {
        match self {
            Self::Small | Self::Large => "h-0.5",
            Self::Medium => "h-px",
        }
    }
}

/// Which bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bar {
    Top,
    Bottom,
}

/// CSS transform of a bar.
pub fn bar_transform(bar: Bar, is_open: bool) -> String {
    let offset = tokens::burger::BAR_OFFSET_PX;
    match (bar, is_open) {
        (Bar::Top, true) => "translateY(0) rotate(45deg)".to_string(),
        (Bar::Bottom, true) => "translateY(0) rotate(-45deg)".to_string(),
        (Bar::Top, false) => format!("translateY(-{offset}px) rotate(0deg)"),
        (Bar::Bottom, false) => format!("translateY({offset}px) rotate(0deg)"),
    }
}

/// Accessible label announcing what activation will do.
pub fn aria_label(is_open: bool) -> &'static str {
    if is_open { "Close menu" } else { "Open menu" }
}
