//! Scroll-triggered section reveals
//!
//! Every tracked section fires once, the first time its top edge crosses
//! the trigger line (80% down the viewport by default). Fired sections then
//! play their reveal timeline to completion and never reset.

use showroom_ipc::ElementStyle;

use crate::content::{revealed_section_ids, STORY_SECTION};
use crate::layout::PageLayout;
use crate::timeline::{feature_reveal, story_reveal, Timeline};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

#[derive(Debug, Clone, PartialEq)]
struct RevealTrigger {
    section_id: String,
    revealed: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct ScrollRevealSequencer {
    viewport_fraction: f32,
    triggers: Vec<RevealTrigger>,
}

impl Default for ScrollRevealSequencer {
    fn default() -> Self {
        Self::new(
            revealed_section_ids(),
            showroom_config::REVEAL_VIEWPORT_FRACTION,
        )
    }
}

impl ScrollRevealSequencer {
    pub fn new<I, S>(section_ids: I, viewport_fraction: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            viewport_fraction,
            triggers: section_ids
                .into_iter()
                .map(|id| RevealTrigger {
                    section_id: id.into(),
                    revealed: false,
                })
                .collect(),
        }
    }

    /// Fire every pending section whose top has reached the trigger line.
    /// Returns the ids fired by this call, in page order.
    pub fn update(&mut self, scroll_offset: f32, layout: &PageLayout) -> Vec<String> {
        let line = scroll_offset + layout.viewport_height() * self.viewport_fraction;
        let mut fired = Vec::new();
        for trigger in self.triggers.iter_mut().filter(|t| !t.revealed) {
            let Some(bounds) = layout.section(&trigger.section_id) else {
                continue;
            };
            if bounds.top <= line {
                trigger.revealed = true;
                tracing::debug!("Revealing section {}", trigger.section_id);
                fired.push(trigger.section_id.clone());
            }
        }
        fired
    }

    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.triggers
            .iter()
            .any(|t| t.section_id == section_id && t.revealed)
    }

    pub fn pending(&self) -> usize {
        self.triggers.iter().filter(|t| !t.revealed).count()
    }
}

/// Reveal timeline for a section
pub fn reveal_timeline(section_id: &str) -> Timeline {
    if section_id == STORY_SECTION {
        story_reveal()
    } else {
        feature_reveal()
    }
}

#[derive(Debug, Clone)]
struct RunningReveal {
    section_id: String,
    timeline: Timeline,
    elapsed: f32,
}

/// One sampled frame of a running reveal
#[derive(Debug, Clone, PartialEq)]
pub struct RevealFrame {
    pub section_id: String,
    pub elements: Vec<ElementStyle>,
    pub finished: bool,
}

/// Reveal timelines currently playing
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct RevealAnimations {
    running: Vec<RunningReveal>,
}

impl RevealAnimations {
    pub fn start(&mut self, section_id: impl Into<String>, timeline: Timeline) {
        self.running.push(RunningReveal {
            section_id: section_id.into(),
            timeline,
            elapsed: 0.0,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Advance every running reveal. Finished ones emit a final frame and are dropped.
    pub fn tick(&mut self, delta_seconds: f32) -> Vec<RevealFrame> {
        let mut frames = Vec::with_capacity(self.running.len());
        self.running.retain_mut(|reveal| {
            reveal.elapsed += delta_seconds;
            let finished = reveal.elapsed >= reveal.timeline.duration();
            frames.push(RevealFrame {
                section_id: reveal.section_id.clone(),
                elements: reveal.timeline.sample(reveal.elapsed),
                finished,
            });
            !finished
        });
        frames
    }
}
