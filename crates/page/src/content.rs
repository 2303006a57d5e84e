//! Static page copy

use showroom_ipc::{
    FeatureContent, FooterContent, HeroContent, NavLinkInfo, PageContent, SectionInfo,
    StoryContent,
};

/// Id of the hero section holding the 3D stage
pub const HOME_SECTION: &str = "home";

/// Id of the story section
pub const STORY_SECTION: &str = "story";

/// Id of the footer
pub const FOOTER_SECTION: &str = "footer";

/// Animation target id of the fixed navbar
pub const NAVBAR_ID: &str = "navbar";

/// One alternating image/text feature block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub nav_title: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
    /// Image on the left instead of the right
    pub reverse: bool,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "performance",
        nav_title: "Performance",
        title: "Unmatched Performance",
        description: "The heart of the R8 is its naturally aspirated V10 engine, delivering raw power and an engine note that is pure music. Combined with the legendary quattro all-wheel drive, it offers grip and handling that inspires confidence on any road or track.",
        image_url: "./R8engine.jpg",
        image_alt: "Audi R8 Engine",
        reverse: false,
    },
    Feature {
        id: "cockpit",
        nav_title: "Cockpit",
        title: "Driver-Focused Cockpit",
        description: "Inside, the Audi Virtual Cockpit places everything you need directly in your line of sight. Premium materials, fine Nappa leather, and carbon fiber inlays create an atmosphere of sophisticated sportiness.",
        image_url: "./cockpit.jpg",
        image_alt: "Audi R8 Cockpit",
        reverse: true,
    },
    Feature {
        id: "design",
        nav_title: "Design",
        title: "Iconic Exterior Design",
        description: "The R8's silhouette is unmistakable. A low, wide stance, prominent sideblades, and a sweeping roofline create a look that is both aggressive and elegant. Every line serves a purpose, channeling air to cool the engine and create downforce, ensuring stability at any speed.",
        image_url: "./R8.jpg",
        image_alt: "Audi R8 Exterior Design",
        reverse: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
}

pub const HERO: Hero = Hero {
    title: "Audi R8",
    tagline: "Experience the pinnacle of performance and design. The Audi R8 combines breathtaking speed with iconic aesthetics for an unparalleled driving sensation.",
    call_to_action: "Book a Test Ride",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const STORY: Story = Story {
    title: "The Legacy of the R8",
    paragraphs: &[
        "Born on the racetrack, the Audi R8 brought motorsport technology to the streets. It began as a bold concept, a vision to create a supercar that was not only ferociously fast but also perfectly suited for everyday driving. The Le Mans quattro concept car of 2003 was the spark, a stunning preview of what was to come.",
        "When the first generation debuted, its mid-engine layout and revolutionary quattro all-wheel drive set a new benchmark in the supercar world. It was a machine that offered breathtaking performance with an unexpected level of civility and control, changing perceptions of what a high-performance vehicle could be.",
        "Over the years, the R8 has evolved, each iteration refining its iconic design and pushing the boundaries of engineering. The V10 engine became its beating heart, its roar a symphony of power. Today, the R8 isn't just a car; it's a statement of progress, a testament to Audi's relentless pursuit of 'Vorsprung durch Technik'\u{2014}Advancement through Technology.",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub owner: &'static str,
    pub disclaimer: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER: Footer = Footer {
    owner: "Audi Automotive",
    disclaimer: "A recreation for demonstration purposes.",
    links: &["Privacy Policy", "Terms of Service", "Contact"],
};

/// Label shown on the navbar button
pub const NAV_BUTTON: &str = "Book Now";

/// Navbar entries: the model, every feature, then the story
pub fn nav_links() -> Vec<NavLinkInfo> {
    let link = |label: &str, id: &str| NavLinkInfo {
        label: label.to_string(),
        href: format!("#{id}"),
    };
    let mut links = vec![link("Model", HOME_SECTION)];
    links.extend(FEATURES.iter().map(|feature| link(feature.nav_title, feature.id)));
    links.push(link("Story", STORY_SECTION));
    links
}

/// Section ids in page order
pub fn section_ids() -> Vec<&'static str> {
    let mut ids = vec![HOME_SECTION];
    ids.extend(FEATURES.iter().map(|feature| feature.id));
    ids.push(STORY_SECTION);
    ids.push(FOOTER_SECTION);
    ids
}

/// Sections that reveal on scroll
pub fn revealed_section_ids() -> Vec<&'static str> {
    let mut ids: Vec<_> = FEATURES.iter().map(|feature| feature.id).collect();
    ids.push(STORY_SECTION);
    ids
}

/// Section summary sent to the UI on connect
pub fn section_infos() -> Vec<SectionInfo> {
    let mut infos: Vec<_> = FEATURES
        .iter()
        .map(|feature| SectionInfo {
            id: feature.id.to_string(),
            nav_title: feature.nav_title.to_string(),
            title: feature.title.to_string(),
        })
        .collect();
    infos.push(SectionInfo {
        id: STORY_SECTION.to_string(),
        nav_title: "Story".to_string(),
        title: STORY.title.to_string(),
    });
    infos
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// All page copy as sent to the UI on connect
pub fn page_content() -> PageContent {
    PageContent {
        hero: HeroContent {
            title: HERO.title.to_string(),
            tagline: HERO.tagline.to_string(),
            call_to_action: HERO.call_to_action.to_string(),
        },
        nav_links: nav_links(),
        nav_button: NAV_BUTTON.to_string(),
        features: FEATURES
            .iter()
            .map(|feature| FeatureContent {
                id: feature.id.to_string(),
                title: feature.title.to_string(),
                description: feature.description.to_string(),
                image_url: feature.image_url.to_string(),
                image_alt: feature.image_alt.to_string(),
                reverse: feature.reverse,
            })
            .collect(),
        story: StoryContent {
            title: STORY.title.to_string(),
            paragraphs: owned(STORY.paragraphs),
        },
        footer: FooterContent {
            owner: FOOTER.owner.to_string(),
            disclaimer: FOOTER.disclaimer.to_string(),
            links: owned(FOOTER.links),
        },
    }
}
