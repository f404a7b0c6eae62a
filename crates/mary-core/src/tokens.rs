//! Design tokens.
//!
//! Read-only constants shared by every visual component: palette, type
//! scale, spacing, breakpoints, animation presets, and the handful of
//! behavioural constants (scroll threshold, drawer stagger) the header and
//! drawer are tuned around.

/// Base palette.
pub mod colors {
    pub const PRIMARY: &str = "#000000";
    pub const SECONDARY: &str = "#FFFFFF";
    pub const ACCENT: &str = "#0066CC";

    pub const GRAY_100: &str = "#F5F5F5";
    pub const GRAY_300: &str = "#E0E0E0";
    pub const GRAY_500: &str = "#9E9E9E";
    pub const GRAY_700: &str = "#666666";

    /// Hero backdrop when no background image is configured.
    pub const HERO_FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #1a1a1a 0%, #2d2d2d 100%)";
}

/// Font stacks and fluid type sizes.
pub mod typography {
    pub const FONT_SANS: &str = r#""Helvetica Neue", Arial, sans-serif"#;
    pub const FONT_DISPLAY: &str = r#""Playfair Display", serif"#;

    pub const SIZE_HERO: &str = "clamp(3rem, 8vw, 6rem)";
    pub const SIZE_SECTION: &str = "clamp(2rem, 5vw, 3.5rem)";
    pub const SIZE_BODY: &str = "1rem";
    pub const SIZE_SMALL: &str = "0.875rem";
}

/// Spacing scale.
pub mod spacing {
    pub const XS: &str = "0.5rem";
    pub const SM: &str = "1rem";
    pub const MD: &str = "2rem";
    pub const LG: &str = "4rem";
    pub const XL: &str = "6rem";
    pub const XXL: &str = "8rem";
}

/// Breakpoint widths in CSS pixels.
pub mod breakpoints {
    pub const MOBILE: u32 = 640;
    pub const TABLET: u32 = 768;
    pub const DESKTOP: u32 = 1024;
    pub const WIDE: u32 = 1280;

    /// Width below which the header swaps the inline nav for the burger.
    pub const NAV_COLLAPSE: u32 = TABLET;
}

/// Animation duration and easing presets.
pub mod animations {
    use crate::easing::Easing;

    pub const DURATION_FAST_MS: u32 = 200;
    pub const DURATION_NORMAL_MS: u32 = 500;
    pub const DURATION_SLOW_MS: u32 = 1000;

    pub const EASE_LINEAR: Easing = Easing::Linear;
    pub const EASE_OUT: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);
    pub const EASE_IN_OUT: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
    pub const EASE_BOUNCE: Easing = Easing::CubicBezier(0.68, -0.55, 0.265, 1.55);
}

/// Header behaviour.
pub mod header {
    /// Scroll offset (px) above which the header turns solid. Strictly greater.
    pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
}

/// Mobile drawer behaviour.
pub mod drawer {
    /// Delay before the first entry starts its enter transition.
    pub const ENTRY_BASE_DELAY_MS: u32 = 200;
    /// Extra delay added per entry index.
    pub const ENTRY_STEP_DELAY_MS: u32 = 100;
    /// Entry slide/fade duration.
    pub const ENTRY_TRANSITION_MS: u32 = 500;
    /// Panel and backdrop slide/fade duration.
    pub const PANEL_TRANSITION_MS: u32 = 700;
}

/// Burger toggle behaviour.
pub mod burger {
    pub const TRANSITION_MS: u32 = 300;
    /// Vertical offset of each bar from the centre when closed.
    pub const BAR_OFFSET_PX: u32 = 8;
}

/// Hero parallax behaviour.
pub mod hero {
    /// Upward travel of the watermark across the hero's full scroll range.
    pub const PARALLAX_DISTANCE_PX: f64 = 100.0;
}
