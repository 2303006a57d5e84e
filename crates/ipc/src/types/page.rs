//! Page layout and reveal animation types for IPC messages.

use serde::{Deserialize, Serialize};

/// Section geometry reported by the UI after layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageLayoutInfo {
    /// Visible viewport height in pixels
    pub viewport_height: f32,
    pub sections: Vec<SectionBounds>,
}

/// Vertical extent of one page section in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

/// Static description of a page section sent on initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub id: String,
    pub nav_title: String,
    pub title: String,
}

/// Copy for every part of the page, sent once on initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub hero: HeroContent,
    pub nav_links: Vec<NavLinkInfo>,
    /// Label of the navbar call-to-action button
    pub nav_button: String,
    pub features: Vec<FeatureContent>,
    pub story: StoryContent,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub tagline: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLinkInfo {
    pub label: String,
    /// In-page anchor, e.g. `#story`
    pub href: String,
}

/// One alternating image/text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    /// Image on the left instead of the right
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryContent {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Footer copy. The UI renders the notice as `© <current year> <owner>. All rights reserved.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub owner: String,
    pub disclaimer: String,
    pub links: Vec<String>,
}

/// Animated style of one element in a reveal timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub opacity: f32,
    /// Vertical offset in pixels from the resting position
    pub translate_y: f32,
    pub scale: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}
