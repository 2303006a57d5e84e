//! Showroom page model
//!
//! Everything about the page around the 3D stage that is not rendering:
//! the copy, section geometry, scroll position with the scroll-to-top
//! control, and the scroll-triggered reveal animations.

mod content;
mod layout;
mod reveal;
mod scroll;
mod timeline;

pub use content::{
    nav_links, page_content, revealed_section_ids, section_ids, section_infos, Feature, Footer,
    Hero, Story, FEATURES, FOOTER, FOOTER_SECTION, HERO, HOME_SECTION, NAVBAR_ID, NAV_BUTTON, STORY,
    STORY_SECTION,
};
pub use layout::PageLayout;
pub use reveal::{reveal_timeline, RevealAnimations, RevealFrame, ScrollRevealSequencer};
pub use scroll::{scroll_to_top_visible, PageScroll, SMOOTH_SCROLL_SECONDS};
pub use timeline::{
    feature_reveal, hero_intro, navbar_intro, story_reveal, Ease, FromVars, Position, Timeline,
    TweenSpec,
};
