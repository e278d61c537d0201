use crate::constants::{STATS_DURATION_MS, STATS_TICK_MS};

/// Hero elements revealed in order after the loading screen.
pub const HERO_SEQUENCE: [&str; 7] = [
    ".hero-badge",
    ".hero-title .title-line:first-child",
    ".hero-title .title-line:last-child",
    ".hero-tagline",
    ".hero-description",
    ".hero-actions",
    ".hero-stats",
];

pub const SHOWREEL_SECTION_ID: &str = "showreel";

/// Counts a stat up to its target over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    target: u32,
    current: f32,
    increment: f32,
}

impl StatCounter {
    pub fn new(target: u32) -> Self {
        let ticks = STATS_DURATION_MS / STATS_TICK_MS as f32;
        Self {
            target,
            current: 0.0,
            increment: target as f32 / ticks,
        }
    }

    /// Parse a `data-count` attribute from its leading digits, so `150+`
    /// counts to 150. Junk counts to zero.
    pub fn from_attr(attr: Option<&str>) -> Self {
        let target = attr
            .map(|s| {
                let s = s.trim_start();
                let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
                &s[..end]
            })
            .and_then(|digits| digits.parse::<u32>().ok())
            .unwrap_or(0);
        Self::new(target)
    }

    /// Advance one tick; returns `true` once the target is reached.
    pub fn tick(&mut self) -> bool {
        self.current += self.increment;
        if self.current >= self.target as f32 {
            self.current = self.target as f32;
            return true;
        }
        false
    }

    pub fn label(&self) -> String {
        format!("{}+", self.current.floor() as u32)
    }

    #[inline]
    pub fn target(&self) -> u32 {
        self.target
    }
}
