//! Page scroll position and the scroll-to-top control

use crate::timeline::Ease;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Length of the smooth scroll back to the top
pub const SMOOTH_SCROLL_SECONDS: f32 = 0.6;

/// The scroll-to-top control shows strictly past the threshold
pub fn scroll_to_top_visible(offset: f32, threshold: f32) -> bool {
    offset > threshold
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SmoothScroll {
    from: f32,
    elapsed: f32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct PageScroll {
    offset: f32,
    threshold: f32,
    smooth: Option<SmoothScroll>,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new(showroom_config::SCROLL_TO_TOP_THRESHOLD)
    }
}

impl PageScroll {
    pub fn new(threshold: f32) -> Self {
        Self {
            offset: 0.0,
            threshold,
            smooth: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset reported by the UI; cancels a running scroll-to-top
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
        self.smooth = None;
    }

    /// Scroll by `delta` pixels, clamped to `[0, max]`
    pub fn scroll_by(&mut self, delta: f32, max: f32) {
        self.set_offset((self.offset + delta).min(max.max(0.0)));
    }

    pub fn is_top_button_visible(&self) -> bool {
        scroll_to_top_visible(self.offset, self.threshold)
    }

    pub fn is_scrolling_to_top(&self) -> bool {
        self.smooth.is_some()
    }

    /// Start a smooth scroll back to offset 0
    pub fn scroll_to_top(&mut self) {
        if self.offset <= 0.0 {
            return;
        }
        self.smooth = Some(SmoothScroll {
            from: self.offset,
            elapsed: 0.0,
        });
    }

    /// Advance a running scroll-to-top. Returns the new offset while one is running.
    pub fn tick(&mut self, delta_seconds: f32) -> Option<f32> {
        let smooth = self.smooth.as_mut()?;
        smooth.elapsed += delta_seconds;
        let t = smooth.elapsed / SMOOTH_SCROLL_SECONDS;
        self.offset = smooth.from * (1.0 - Ease::Power3Out.apply(t));
        if t >= 1.0 {
            self.offset = 0.0;
            self.smooth = None;
        }
        Some(self.offset)
    }
}
