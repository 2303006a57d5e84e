//! Reveal animations
//!
//! A small tween timeline in the style of GSAP's `gsap.timeline().from(...)`:
//! every tween animates a handful of element properties *from* a start value
//! back to the element's resting style. Sampling the timeline at a time yields
//! one [`ElementStyle`] per element for the UI to apply.

use std::ops::Range;

use showroom_ipc::ElementStyle;

/// Easing curves used by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out, GSAP's default
    #[default]
    Power1Out,
    /// Quartic ease-out
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Properties a tween starts from; unset properties are left alone
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FromVars {
    pub opacity: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
}

impl FromVars {
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Where a tween is placed on the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// After everything added so far
    End,
    /// Relative to the end, `-=0.5` is `Offset(-0.5)`
    Offset(f32),
    /// Same start as the previous tween, GSAP's `"<"`
    WithPrevious,
    /// Absolute time in seconds
    At(f32),
}

#[derive(Debug, Clone, PartialEq)]
struct Tween {
    targets: Range<usize>,
    from: FromVars,
    start: f32,
    duration: f32,
    stagger: f32,
    ease: Ease,
}

impl Tween {
    fn end(&self) -> f32 {
        let last = self.targets.len().saturating_sub(1) as f32;
        self.start + last * self.stagger + self.duration
    }

    fn progress(&self, element: usize, time: f32) -> f32 {
        let index = (element - self.targets.start) as f32;
        let start = self.start + index * self.stagger;
        if time >= start + self.duration {
            return 1.0;
        }
        if self.duration <= 0.0 {
            return 0.0;
        }
        self.ease.apply((time - start) / self.duration)
    }
}

/// Builder for one tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub from: FromVars,
    pub duration: f32,
    pub stagger: f32,
    pub ease: Ease,
}

impl TweenSpec {
    pub fn new(from: FromVars, duration: f32) -> Self {
        Self {
            from,
            duration,
            stagger: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    element_count: usize,
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new(element_count: usize) -> Self {
        Self {
            element_count,
            tweens: Vec::new(),
        }
    }

    /// Add a tween animating `targets` from `spec.from` to their resting style
    pub fn from(mut self, targets: Range<usize>, spec: TweenSpec, position: Position) -> Self {
        let targets = targets.start.min(self.element_count)..targets.end.min(self.element_count);
        let start = match position {
            Position::End => self.duration(),
            Position::Offset(offset) => self.duration() + offset,
            Position::WithPrevious => self.tweens.last().map_or(0.0, |tween| tween.start),
            Position::At(time) => time,
        }
        .max(0.0);
        self.tweens.push(Tween {
            targets,
            from: spec.from,
            start,
            duration: spec.duration,
            stagger: spec.stagger,
            ease: spec.ease,
        });
        self
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Total length in seconds
    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    /// Element styles at `time` seconds
    pub fn sample(&self, time: f32) -> Vec<ElementStyle> {
        let mut styles = vec![ElementStyle::default(); self.element_count];
        for tween in &self.tweens {
            for element in tween.targets.clone() {
                let progress = tween.progress(element, time);
                let style = &mut styles[element];
                if let Some(opacity) = tween.from.opacity {
                    style.opacity = lerp(opacity, 1.0, progress);
                }
                if let Some(y) = tween.from.y {
                    style.translate_y = lerp(y, 0.0, progress);
                }
                if let Some(scale) = tween.from.scale {
                    style.scale = lerp(scale, 1.0, progress);
                }
            }
        }
        styles
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Feature block: [section, heading, paragraph, image]
pub fn feature_reveal() -> Timeline {
    Timeline::new(4)
        .from(0..1, TweenSpec::new(FromVars::default().opacity(0.0), 1.0), Position::End)
        .from(
            1..3,
            TweenSpec::new(FromVars::default().opacity(0.0).y(20.0), 0.8)
                .stagger(0.2)
                .ease(Ease::Power3Out),
            Position::Offset(-0.5),
        )
        .from(
            3..4,
            TweenSpec::new(FromVars::default().scale(1.1), 1.2).ease(Ease::Power3Out),
            Position::WithPrevious,
        )
}

/// Story block: [heading, paragraphs]
pub fn story_reveal() -> Timeline {
    Timeline::new(2).from(
        0..2,
        TweenSpec::new(FromVars::default().opacity(0.0).y(50.0), 1.0)
            .stagger(0.3)
            .ease(Ease::Power3Out),
        Position::End,
    )
}

/// Hero copy on load: [title, tagline, button]
pub fn hero_intro() -> Timeline {
    Timeline::new(3).from(
        0..3,
        TweenSpec::new(FromVars::default().opacity(0.0).y(20.0), 1.0)
            .stagger(0.2)
            .ease(Ease::Power3Out),
        Position::At(0.5),
    )
}

/// Navbar slide-in on load: [header]
pub fn navbar_intro() -> Timeline {
    Timeline::new(1).from(
        0..1,
        TweenSpec::new(FromVars::default().opacity(0.0).y(-100.0), 1.0).ease(Ease::Power3Out),
        Position::End,
    )
}
