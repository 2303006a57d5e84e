//! Page section geometry

use showroom_config::DisplayConfig;
use showroom_ipc::{PageLayoutInfo, SectionBounds};

use crate::content::{section_ids, FOOTER_SECTION};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Footer height as a fraction of the viewport
const FOOTER_VIEWPORT_FRACTION: f32 = 0.2;

/// Vertical extent of every section, in document pixels
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct PageLayout {
    viewport_height: f32,
    sections: Vec<SectionBounds>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::for_display(&DisplayConfig::default())
    }
}

impl PageLayout {
    /// Every section one viewport tall, footer a fifth of one
    pub fn standard(viewport_height: f32) -> Self {
        let mut top = 0.0;
        let sections = section_ids()
            .into_iter()
            .map(|id| {
                let height = if id == FOOTER_SECTION {
                    viewport_height * FOOTER_VIEWPORT_FRACTION
                } else {
                    viewport_height
                };
                let bounds = SectionBounds {
                    id: id.to_string(),
                    top,
                    height,
                };
                top += height;
                bounds
            })
            .collect();
        Self {
            viewport_height,
            sections,
        }
    }

    /// Standard layout for the window size, until the UI measures the real one
    pub fn for_display(display: &DisplayConfig) -> Self {
        Self::standard(display.height as f32)
    }

    /// Layout measured by the UI
    pub fn from_info(info: PageLayoutInfo) -> Self {
        Self {
            viewport_height: info.viewport_height,
            sections: info.sections,
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SectionBounds> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn document_height(&self) -> f32 {
        self.sections
            .iter()
            .map(|section| section.top + section.height)
            .fold(0.0, f32::max)
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport_height).max(0.0)
    }
}
