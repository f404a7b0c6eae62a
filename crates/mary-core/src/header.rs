//! Header state.
//!
//! Two independent axes: `scrolled`, derived from the page scroll offset,
//! and `menu_open`, toggled by the burger. The visual appearance is never
//! stored; [`header_visual`] derives it from the inputs every render.

use crate::tokens;

/// Header background treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderBackground {
    /// See-through, floating over the hero.
    Transparent,
    /// Opaque, blurred bar.
    Solid,
}

/// Foreground colour family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Light,
    Dark,
}

impl TextTone {
    /// Text colour utility class.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Light => "text-white",
            Self::Dark => "text-black",
        }
    }

    /// Secondary text, e.g. the tagline under the logo.
    pub fn muted_text_class(self) -> &'static str {
        match self {
            Self::Light => "text-white/60",
            Self::Dark => "text-black/60",
        }
    }

    /// Fill class for burger bars and the underline indicator.
    pub fn fill_class(self) -> &'static str {
        match self {
            Self::Light => "bg-white",
            Self::Dark => "bg-black",
        }
    }
}

/// Inputs the header appearance depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderInput {
    /// Vertical page scroll offset in CSS pixels.
    pub scroll_offset: f64,
    /// Whether the mobile drawer is open.
    pub menu_open: bool,
    /// Whether the page allows a transparent header over its first section.
    pub transparent: bool,
}

/// Derived header appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderVisual {
    pub background: HeaderBackground,
    pub text: TextTone,
    pub menu_open: bool,
}

impl HeaderVisual {
    /// Utility classes for the `<header>` element.
    pub fn class(&self) -> String {
        let background = match self.background {
            HeaderBackground::Transparent => "bg-transparent",
            HeaderBackground::Solid => "bg-white/90 backdrop-blur-md shadow-sm",
        };
        format!(
            "fixed top-0 left-0 right-0 z-50 transition-colors duration-300 {background} {}",
            self.text.text_class()
        )
    }
}

/// Whether an offset is past the solid-header threshold.
pub fn is_scrolled(scroll_offset: f64) -> bool {
    scroll_offset > tokens::header::SCROLL_THRESHOLD_PX
}

/// Derive the header appearance.
///
/// Solid whenever the page is scrolled past the threshold or transparency
/// is disabled; transparent otherwise. The drawer state doesn't affect the
/// bar itself.
pub fn header_visual(input: HeaderInput) -> HeaderVisual {
    let solid = !input.transparent || is_scrolled(input.scroll_offset);
    let (background, text) = if solid {
        (HeaderBackground::Solid, TextTone::Dark)
    } else {
        (HeaderBackground::Transparent, TextTone::Light)
    };
    HeaderVisual {
        background,
        text,
        menu_open: input.menu_open,
    }
}

/// Classes for a desktop navigation link.
///
/// The underline indicator is full width iff the item is active. Hover
/// only raises the opacity of inactive items.
pub fn nav_link_class(active: bool, tone: TextTone) -> String {
    let underline = match tone {
        TextTone::Light => "after:bg-white",
        TextTone::Dark => "after:bg-black",
    };
    let state = if active {
        "after:w-full"
    } else {
        "after:w-0 opacity-80 hover:opacity-100"
    };
    format!(
        "relative text-lg uppercase tracking-wider font-semibold font-condensed leading-tight \
         transition-all duration-300 after:absolute after:bottom-0 after:left-0 after:h-px \
         after:transition-all after:duration-300 {underline} {state}"
    )
}

/// Why the drawer was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    Escape,
    Backdrop,
    Link,
}

/// Header state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    scroll_offset: f64,
    menu_open: bool,
    transparent: bool,
}

impl HeaderState {
    /// Initial state at the top of the page with the drawer closed.
    pub fn new(transparent: bool) -> Self {
        Self {
            scroll_offset: 0.0,
            menu_open: false,
            transparent,
        }
    }

    /// Record a scroll offset. Returns `true` when `scrolled` flipped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let before = self.scrolled();
        self.scroll_offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        before != self.scrolled()
    }

    /// Burger activation.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the drawer. Returns `true` if it was open.
    pub fn close_menu(&mut self, reason: CloseReason) -> bool {
        let was_open = self.menu_open;
        self.menu_open = false;
        if was_open {
            tracing::debug!(?reason, "closing mobile menu");
        }
        was_open
    }

    pub fn scrolled(&self) -> bool {
        is_scrolled(self.scroll_offset)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn visual(&self) -> HeaderVisual {
        header_visual(HeaderInput {
            scroll_offset: self.scroll_offset,
            menu_open: self.menu_open,
            transparent: self.transparent,
        })
    }
}
