//! Keyframe timeline.
//!
//! A [`Timeline`] is an ordered list of [`Track`]s, each tweening a few
//! properties of one target between two values over a window of time.
//! Sampling is a pure function of elapsed seconds, so one tick source can
//! drive every track and keep them locked together however irregular the
//! ticks are.

use std::fmt::Write as _;

use crate::easing::Easing;

/// An animatable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Scale,
    /// Vertical offset as a percentage of the target's own height.
    TranslateYPercent,
    /// Vertical offset in CSS pixels.
    TranslateYPx,
    Opacity,
}

/// A single property change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

impl Tween {
    pub fn new(property: Property, from: f64, to: f64) -> Self {
        Self { property, from, to }
    }
}

/// One target's tweens over one time window. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    pub target: T,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
    pub tweens: Vec<Tween>,
}

impl<T> Track<T> {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Eased progress at time `t`: 0 before the window, 1 after it.
    pub fn progress(&self, t: f64) -> f64 {
        if t < self.start {
            0.0
        } else if self.duration <= 0.0 || t >= self.end() {
            1.0
        } else {
            self.easing.apply((t - self.start) / self.duration)
        }
    }
}

/// Resolved property values of one target at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub scale: Option<f64>,
    pub translate_y_percent: Option<f64>,
    pub translate_y_px: Option<f64>,
    pub opacity: Option<f64>,
}

impl Pose {
    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::Scale => self.scale,
            Property::TranslateYPercent => self.translate_y_percent,
            Property::TranslateYPx => self.translate_y_px,
            Property::Opacity => self.opacity,
        }
    }

    fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::Scale => &mut self.scale,
            Property::TranslateYPercent => &mut self.translate_y_percent,
            Property::TranslateYPx => &mut self.translate_y_px,
            Property::Opacity => &mut self.opacity,
        };
        *slot = Some(value);
    }

    /// Shift the pixel offset, e.g. to layer a scroll-linked offset on top.
    #[must_use]
    pub fn offset_px(mut self, dy: f64) -> Self {
        self.translate_y_px = Some(self.translate_y_px.unwrap_or(0.0) + dy);
        self
    }

    /// Inline CSS for this pose. Empty when nothing is set.
    pub fn css(&self) -> String {
        let mut transform = Vec::new();
        if let Some(pct) = self.translate_y_percent {
            transform.push(format!("translateY({pct:.3}%)"));
        }
        if let Some(px) = self.translate_y_px {
            transform.push(format!("translateY({px:.3}px)"));
        }
        if let Some(scale) = self.scale {
            transform.push(format!("scale({scale:.4})"));
        }

        let mut css = String::new();
        if !transform.is_empty() {
            let _ = write!(css, "transform: {};", transform.join(" "));
        }
        if let Some(opacity) = self.opacity {
            if !css.is_empty() {
                css.push(' ');
            }
            let _ = write!(css, "opacity: {opacity:.4};");
        }
        css
    }
}

/// Poses of every animated target at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    poses: Vec<(T, Pose)>,
}

impl<T: Copy + PartialEq> Frame<T> {
    /// Pose of `target`; empty if nothing animates it.
    pub fn pose(&self, target: T) -> Pose {
        self.poses
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, pose)| *pose)
            .unwrap_or_default()
    }

    fn pose_mut(&mut self, target: T) -> &mut Pose {
        let index = match self.poses.iter().position(|(t, _)| *t == target) {
            Some(index) => index,
            None => {
                self.poses.push((target, Pose::default()));
                self.poses.len() - 1
            }
        };
        &mut self.poses[index].1
    }
}

/// An ordered set of tracks sharing one clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    tracks: Vec<Track<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { tracks: Vec::new() }
    }
}

impl<T: Copy + PartialEq> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track starting at `start` seconds.
    pub fn to(
        &mut self,
        target: T,
        start: f64,
        duration: f64,
        easing: Easing,
        tweens: Vec<Tween>,
    ) -> &mut Self {
        self.tracks.push(Track {
            target,
            start: start.max(0.0),
            duration: duration.max(0.0),
            easing,
            tweens,
        });
        self
    }

    /// Add one track per target, each starting `step` seconds after the
    /// previous one.
    pub fn stagger(
        &mut self,
        targets: impl IntoIterator<Item = T>,
        start: f64,
        step: f64,
        duration: f64,
        easing: Easing,
        tweens: &[Tween],
    ) -> &mut Self {
        for (index, target) in targets.into_iter().enumerate() {
            let offset = start + step * index as f64;
            self.to(target, offset, duration, easing, tweens.to_vec());
        }
        self
    }

    pub fn tracks(&self) -> &[Track<T>] {
        &self.tracks
    }

    /// Time at which the last track finishes.
    pub fn duration(&self) -> f64 {
        self.tracks.iter().map(Track::end).fold(0.0, f64::max)
    }

    pub fn is_complete(&self, t: f64) -> bool {
        t >= self.duration()
    }

    /// Resolve every target's pose at `t` seconds.
    ///
    /// Tracks hold their `from` values until they start and their `to`
    /// values after they end. When several tracks drive the same property,
    /// the latest one that has started wins; before any has started the
    /// earliest one's `from` applies.
    pub fn sample(&self, t: f64) -> Frame<T> {
        let mut ordered: Vec<&Track<T>> = self.tracks.iter().collect();
        ordered.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut frame = Frame { poses: Vec::new() };
        for track in ordered {
            let started = t >= track.start;
            let progress = track.progress(t);
            let pose = frame.pose_mut(track.target);
            for tween in &track.tweens {
                if started || pose.get(tween.property).is_none() {
                    pose.set(tween.property, tween.from + (tween.to - tween.from) * progress);
                }
            }
        }
        frame
    }

    /// One property of one target at `t`, if anything animates it.
    pub fn value_at(&self, target: T, property: Property, t: f64) -> Option<f64> {
        self.sample(t).pose(target).get(property)
    }
}

/// Drives a timeline from wall-clock ticks.
///
/// The first tick defines t=0; later ticks are measured against it, so
/// dropped or late frames only skip ahead and never desynchronise tracks.
#[derive(Debug, Clone)]
pub struct Playback<T> {
    timeline: Timeline<T>,
    origin_ms: Option<f64>,
}

impl<T: Copy + PartialEq> Playback<T> {
    pub fn new(timeline: Timeline<T>) -> Self {
        Self {
            timeline,
            origin_ms: None,
        }
    }

    /// Sample the timeline at a host timestamp in milliseconds.
    /// Returns the frame and whether the timeline has finished.
    pub fn advance(&mut self, now_ms: f64) -> (Frame<T>, bool) {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let elapsed = ((now_ms - origin) / 1000.0).max(0.0);
        (
            self.timeline.sample(elapsed),
            self.timeline.is_complete(elapsed),
        )
    }

    /// Frame to show when animation is unavailable.
    pub fn final_frame(&self) -> Frame<T> {
        self.timeline.sample(self.timeline.duration())
    }

    pub fn timeline(&self) -> &Timeline<T> {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Target {
        Box,
        Dot(usize),
    }

    fn fade_in() -> Vec<Tween> {
        vec![Tween::new(Property::Opacity, 0.0, 1.0)]
    }

    #[test]
    fn test_holds_from_before_start_and_to_after_end() {
        let mut timeline = Timeline::new();
        timeline.to(Target::Box, 1.0, 2.0, Easing::Linear, fade_in());

        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 0.0), Some(0.0));
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 0.999), Some(0.0));
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 2.0), Some(0.5));
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 3.0), Some(1.0));
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 99.0), Some(1.0));
    }

    #[test]
    fn test_untouched_target_has_empty_pose() {
        let mut timeline = Timeline::new();
        timeline.to(Target::Box, 0.0, 1.0, Easing::Linear, fade_in());
        assert_eq!(timeline.sample(0.5).pose(Target::Dot(0)), Pose::default());
    }

    #[test]
    fn test_stagger_offsets() {
        let mut timeline = Timeline::new();
        timeline.stagger(
            (0..3).map(Target::Dot),
            0.5,
            0.1,
            1.0,
            Easing::Linear,
            &fade_in(),
        );

        let starts: Vec<f64> = timeline.tracks().iter().map(|t| t.start).collect();
        assert!((starts[0] - 0.5).abs() < 1e-12);
        assert!((starts[1] - 0.6).abs() < 1e-12);
        assert!((starts[2] - 0.7).abs() < 1e-12);
        assert!((timeline.duration() - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_later_started_track_wins() {
        let mut timeline = Timeline::new();
        timeline
            .to(Target::Box, 0.0, 1.0, Easing::Linear, fade_in())
            .to(
                Target::Box,
                2.0,
                1.0,
                Easing::Linear,
                vec![Tween::new(Property::Opacity, 1.0, 0.0)],
            );

        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 1.5), Some(1.0));
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 2.5), Some(0.5));
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 4.0), Some(0.0));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut timeline = Timeline::new();
        timeline.to(Target::Box, 1.0, 0.0, Easing::Linear, fade_in());
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 0.5), Some(0.0));
        assert_eq!(timeline.value_at(Target::Box, Property::Opacity, 1.0), Some(1.0));
    }

    #[test]
    fn test_playback_uses_first_tick_as_origin() {
        let mut timeline = Timeline::new();
        timeline.to(Target::Box, 0.0, 1.0, Easing::Linear, fade_in());
        let mut playback = Playback::new(timeline);

        let (frame, done) = playback.advance(5_000.0);
        assert_eq!(frame.pose(Target::Box).opacity, Some(0.0));
        assert!(!done);

        // A long stall lands exactly where the clock says, not one step later.
        let (frame, done) = playback.advance(5_500.0);
        assert_eq!(frame.pose(Target::Box).opacity, Some(0.5));
        assert!(!done);

        let (frame, done) = playback.advance(7_000.0);
        assert_eq!(frame.pose(Target::Box).opacity, Some(1.0));
        assert!(done);
    }

    #[test]
    fn test_final_frame() {
        let mut timeline = Timeline::new();
        timeline.to(Target::Box, 0.3, 1.0, Easing::Power2Out, fade_in());
        let playback = Playback::new(timeline);
        assert_eq!(playback.final_frame().pose(Target::Box).opacity, Some(1.0));
    }

    #[test]
    fn test_pose_css() {
        let pose = Pose {
            scale: Some(1.1),
            translate_y_percent: None,
            translate_y_px: Some(50.0),
            opacity: Some(0.0),
        };
        assert_eq!(
            pose.css(),
            "transform: translateY(50.000px) scale(1.1000); opacity: 0.0000;"
        );
        assert_eq!(Pose::default().css(), "");
        assert_eq!(Pose::default().offset_px(-20.0).translate_y_px, Some(-20.0));
    }
}
