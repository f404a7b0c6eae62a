//! Hero section choreography.
//!
//! The entrance is a single [`Timeline`] over the hero's parts. The
//! watermark parallax is separate: it follows scroll position, not time,
//! through [`parallax_offset`].

use serde::{Deserialize, Serialize};

use crate::{
    easing::Easing,
    timeline::{Property, Timeline, Tween},
    tokens,
};

/// Hero configuration supplied by the page shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroProps {
    /// Headline, animated word by word.
    pub title: String,

    /// Oversized watermark behind the headline.
    #[serde(default = "default_background_text")]
    pub background_text: String,

    /// Call-to-action label.
    #[serde(default = "default_cta_text")]
    pub cta_text: String,

    /// Call-to-action destination.
    #[serde(default = "default_cta_href")]
    pub cta_href: String,

    /// Background image URL; a dark gradient is used when absent.
    #[serde(default)]
    pub background_image: Option<String>,
}

fn default_background_text() -> String {
    "mary".to_string()
}

fn default_cta_text() -> String {
    "VIEW MORE".to_string()
}

fn default_cta_href() -> String {
    "#portfolio".to_string()
}

impl HeroProps {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            background_text: default_background_text(),
            cta_text: default_cta_text(),
            cta_href: default_cta_href(),
            background_image: None,
        }
    }

    pub fn with_background_image(mut self, url: impl Into<String>) -> Self {
        self.background_image = Some(url.into());
        self
    }

    /// CSS `background-image` value.
    pub fn background_css(&self) -> String {
        match &self.background_image {
            Some(url) => format!("url({url})"),
            None => tokens::colors::HERO_FALLBACK_GRADIENT.to_string(),
        }
    }

    pub fn title_words(&self) -> Vec<&str> {
        split_words(&self.title)
    }
}

impl Default for HeroProps {
    fn default() -> Self {
        Self::new("Créateurs d'expériences digitales authentiques")
    }
}

/// Animated parts of the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroTarget {
    BackgroundImage,
    TitleWord(usize),
    Watermark,
    Cta,
}

/// Split a headline into the words that animate independently.
pub fn split_words(title: &str) -> Vec<&str> {
    title.split_whitespace().collect()
}

/// Start offset (seconds) of the title words.
pub const TITLE_START: f64 = 0.5;
/// Delay between consecutive title words.
pub const TITLE_STAGGER: f64 = 0.1;
pub const WATERMARK_START: f64 = 0.8;
pub const CTA_START: f64 = 1.2;

/// Entrance timeline for a headline of `word_count` words.
pub fn entrance_timeline(word_count: usize) -> Timeline<HeroTarget> {
    let mut timeline = Timeline::new();
    timeline
        .to(
            HeroTarget::BackgroundImage,
            0.0,
            2.0,
            Easing::Power2Out,
            vec![Tween::new(Property::Scale, 1.1, 1.0)],
        )
        .stagger(
            (0..word_count).map(HeroTarget::TitleWord),
            TITLE_START,
            TITLE_STAGGER,
            1.0,
            Easing::Power3Out,
            &[Tween::new(Property::TranslateYPercent, 100.0, 0.0)],
        )
        .to(
            HeroTarget::Watermark,
            WATERMARK_START,
            1.5,
            Easing::Power2Out,
            vec![
                Tween::new(Property::TranslateYPx, 50.0, 0.0),
                Tween::new(Property::Opacity, 0.0, 0.1),
            ],
        )
        .to(
            HeroTarget::Cta,
            CTA_START,
            0.8,
            Easing::Power2Out,
            vec![
                Tween::new(Property::TranslateYPx, 30.0, 0.0),
                Tween::new(Property::Opacity, 0.0, 1.0),
            ],
        );
    timeline
}

/// How far the hero has scrolled past the top of the viewport.
///
/// `top` and `height` are the hero's bounding box relative to the
/// viewport. 0 while its top is at or below the viewport top, 1 once its
/// bottom has passed it. A degenerate box reports 0.
pub fn scroll_progress(top: f64, height: f64) -> f64 {
    if height.is_nan() || height <= 0.0 || !top.is_finite() {
        return 0.0;
    }
    (-top / height).clamp(0.0, 1.0)
}

/// Watermark offset in pixels for a scroll progress. Linear, no easing.
pub fn parallax_offset(progress: f64) -> f64 {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    -tokens::hero::PARALLAX_DISTANCE_PX * progress
}
