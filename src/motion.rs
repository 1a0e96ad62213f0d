//! Timing and scroll-linked values for the page's entrance and parallax effects.
//!
//! The effects themselves are CSS transitions; this module only computes the
//! numbers that get written into inline styles.

/// Linear map from one range to another, clamped to the output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMap {
    from: (f64, f64),
    to: (f64, f64),
}

impl RangeMap {
    pub const fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self { from, to }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (a, b) = self.from;
        let (c, d) = self.to;
        if a == b {
            return if value < a { c } else { d };
        }
        let t = ((value - a) / (b - a)).clamp(0.0, 1.0);
        c + (d - c) * t
    }
}

/// Hero content drifts down as the page scrolls.
pub const HERO_DRIFT: RangeMap = RangeMap::new((0.0, 1000.0), (0.0, 200.0));
/// Hero content fades out over the first screenful.
pub const HERO_FADE: RangeMap = RangeMap::new((0.0, 300.0), (1.0, 0.0));
/// The scroll hint moves up, against the content.
pub const HINT_DRIFT: RangeMap = RangeMap::new((0.0, 1000.0), (0.0, -150.0));

/// Delay schedule for children that animate in one after another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Seconds before the first child.
    pub base: f64,
    /// Seconds added per group (e.g. per skill category).
    pub group_step: f64,
    /// Seconds added per item within a group.
    pub item_step: f64,
}

impl Stagger {
    pub const fn new(base: f64, group_step: f64, item_step: f64) -> Self {
        Self {
            base,
            group_step,
            item_step,
        }
    }

    pub fn delay(&self, group: usize, index: usize) -> f64 {
        self.base + self.group_step * group as f64 + self.item_step * index as f64
    }

    /// Inline style for a CSS transition delay.
    pub fn style(&self, group: usize, index: usize) -> String {
        format!("transition-delay: {:.2}s", self.delay(group, index))
    }
}

pub const SKILL_TAGS: Stagger = Stagger::new(0.0, 0.1, 0.05);
pub const EXPERIENCE_POINTS: Stagger = Stagger::new(0.0, 0.0, 0.1);
/// Cards and headers inside a revealed section.
pub const SECTION_CHILDREN: Stagger = Stagger::new(0.2, 0.0, 0.1);

/// Inline style for the hero block at the given scroll offset.
pub fn hero_style(offset: f64) -> String {
    format!(
        "transform: translateY({:.1}px); opacity: {:.3}",
        HERO_DRIFT.apply(offset),
        HERO_FADE.apply(offset)
    )
}

pub fn hint_style(offset: f64) -> String {
    format!("transform: translateY({:.1}px)", HINT_DRIFT.apply(offset))
}
