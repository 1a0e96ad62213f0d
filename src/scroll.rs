use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offset past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Distance below the top of the viewport used as the reading position.
pub const PROBE_OFFSET: f64 = 150.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl Section {
    /// Every tracked section, in page order. The active-section scan walks this.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// Sections that get a navbar link.
    pub const NAV: [Section; 6] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// The DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Hero",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// 1-based position in the navbar, `None` for the hero.
    pub fn nav_number(self) -> Option<usize> {
        Self::NAV.iter().position(|s| *s == self).map(|i| i + 1)
    }

    /// `#about` style anchor for links.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a rendered section, relative to the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Source of section geometry. The browser reads it off the live page; tests
/// hand in fixed numbers.
pub trait LayoutProvider {
    /// `None` when the section is not currently rendered.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

impl LayoutProvider for HashMap<Section, SectionBounds> {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.get(&section).copied()
    }
}

impl<T: LayoutProvider + ?Sized> LayoutProvider for &T {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        (**self).bounds(section)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled: bool,
    pub active_section: Section,
}

// Elastic overscroll reports negative offsets on some browsers; NaN also lands on 0.
fn clamp_offset(offset: f64) -> f64 {
    offset.max(0.0)
}

pub fn probe_for(offset: f64) -> f64 {
    clamp_offset(offset) + PROBE_OFFSET
}

pub fn is_scrolled(offset: f64) -> bool {
    clamp_offset(offset) > SCROLL_THRESHOLD
}

/// First section, in page order, whose bounds contain the scroll probe.
pub fn locate(offset: f64, layout: &impl LayoutProvider) -> Option<Section> {
    let probe = probe_for(offset);
    Section::ALL.into_iter().find(|section| {
        layout
            .bounds(*section)
            .is_some_and(|bounds| bounds.contains(probe))
    })
}

/// Keeps the last computed [`ScrollState`] so a probe that lands between
/// sections leaves the highlight where it was.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrollTracker {
    state: ScrollState,
    offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Last offset seen, after clamping.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn on_scroll(&mut self, offset: f64, layout: &impl LayoutProvider) -> ScrollState {
        self.offset = clamp_offset(offset);
        self.state.scrolled = is_scrolled(offset);
        if let Some(section) = locate(offset, layout) {
            self.state.active_section = section;
        }
        self.state
    }
}
