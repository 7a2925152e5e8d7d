//! Animation delay table for revealed content.
//!
//! Nothing here is scheduled at runtime. Once a region's `revealed` flag
//! flips, CSS runs every animation with the delay computed here at render
//! time. Delays are whole milliseconds so the table is exact.

use std::fmt;
use std::ops::Add;

use crate::models::SectionData;

/// First title character starts this long after reveal.
pub const TITLE_BASE_MS: u32 = 800;
/// Extra delay per title character.
pub const TITLE_CHAR_STEP_MS: u32 = 25;
/// Per-character allowance used when timing elements after the title.
pub const TITLE_OFFSET_PER_CHAR_MS: u32 = 20;

/// An animation delay in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Delay(u32);

impl Delay {
    pub const ZERO: Delay = Delay(0);

    pub const fn from_millis(ms: u32) -> Self {
        Delay(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        f64::from(self.0) / 1000.0
    }

    /// CSS time value, e.g. `"0.85s"`.
    pub fn css(self) -> String {
        format!("{}s", self.as_secs_f64())
    }

    /// `animation-delay: …` declaration.
    pub fn animation_style(self) -> String {
        format!("animation-delay: {}", self.css())
    }

    /// `transition-delay: …` declaration.
    pub fn transition_style(self) -> String {
        format!("transition-delay: {}", self.css())
    }
}

impl Add for Delay {
    type Output = Delay;

    fn add(self, rhs: Delay) -> Delay {
        Delay(self.0 + rhs.0)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs_f64())
    }
}

/// Elements that fade in after a section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Subtitle,
    Image,
    Description,
    ServiceGrid,
    Cta,
    /// Contact form controls in document order.
    FormField(usize),
}

impl Role {
    pub const fn step_ms(self) -> u32 {
        match self {
            Role::Subtitle => 200,
            Role::Image => 300,
            Role::Description => 400,
            Role::ServiceGrid => 500,
            Role::Cta => 600,
            Role::FormField(index) => 500 + 100 * index as u32,
        }
    }
}

/// Delay of the title character at `index`.
pub fn title_char(index: usize) -> Delay {
    Delay(TITLE_BASE_MS + TITLE_CHAR_STEP_MS * index as u32)
}

/// Point after which elements below a title of `title_len` characters start.
pub fn title_offset(title_len: usize) -> Delay {
    Delay(TITLE_BASE_MS + TITLE_OFFSET_PER_CHAR_MS * title_len as u32)
}

pub fn role_delay(offset: Delay, role: Role) -> Delay {
    offset + Delay(role.step_ms())
}

/// Shared follow-on offset for a wipe page.
///
/// Every section times its subtitle, description and call to action from
/// the *first* section's title length, so all sections pace identically.
pub fn page_offset(sections: &[SectionData]) -> Delay {
    sections
        .first()
        .map(|s| title_offset(s.title.chars().count()))
        .unwrap_or(Delay(TITLE_BASE_MS))
}

/// Title split into characters with their stagger delays. Spaces become
/// non-breaking so each character can be its own inline block.
pub fn stagger_title(title: &str) -> Vec<(char, Delay)> {
    title
        .chars()
        .enumerate()
        .map(|(i, c)| (if c == ' ' { '\u{a0}' } else { c }, title_char(i)))
        .collect()
}

pub fn service_card(index: usize) -> Delay {
    Delay(900 + 150 * index as u32)
}

/// Menu entries slide in one after another while the menu opens and snap
/// back together when it closes.
pub fn menu_item(index: usize, open: bool) -> Delay {
    if open {
        Delay(300 + 70 * index as u32)
    } else {
        Delay::ZERO
    }
}

/// Children of a staggered container on the card landing page.
pub fn stagger_item(index: usize) -> Delay {
    Delay(200 + 150 * index as u32)
}

/// Cards revealed in a row on the particle landing page.
pub fn card_delay(index: usize) -> Delay {
    Delay(200 * index as u32)
}

pub fn nav_link(index: usize) -> Delay {
    Delay(200 + 100 * index as u32)
}

/// Hero arcs grow in from the centre outwards.
pub fn arc(index: usize, base: Delay) -> Delay {
    base + Delay(150 * index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::wipe;

    #[test]
    fn title_characters_stagger_by_25ms() {
        assert_eq!(title_char(0), Delay::from_millis(800));
        assert_eq!(title_char(2), Delay::from_millis(850));
        assert_eq!(title_char(2).as_secs_f64(), 0.85);
        assert_eq!(title_char(2).css(), "0.85s");
    }

    #[test]
    fn five_char_title_third_char_at_085s() {
        let chars = stagger_title("Hello");
        assert_eq!(chars.len(), 5);
        assert_eq!(chars[2], ('l', Delay::from_millis(850)));
    }

    #[test]
    fn spaces_become_non_breaking() {
        let chars = stagger_title("a b");
        assert_eq!(chars[1].0, '\u{a0}');
    }

    #[test]
    fn roles_follow_title_offset() {
        let offset = title_offset(10);
        assert_eq!(offset, Delay::from_millis(1000));
        assert_eq!(role_delay(offset, Role::Subtitle).as_millis(), 1200);
        assert_eq!(role_delay(offset, Role::Image).as_millis(), 1300);
        assert_eq!(role_delay(offset, Role::Description).as_millis(), 1400);
        assert_eq!(role_delay(offset, Role::ServiceGrid).as_millis(), 1500);
        assert_eq!(role_delay(offset, Role::Cta).as_millis(), 1600);
        assert_eq!(role_delay(offset, Role::FormField(3)).as_millis(), 1800);
    }

    #[test]
    fn page_offset_uses_first_title() {
        // "Innovate with Unrivaled Precision" is 33 characters.
        assert_eq!(page_offset(wipe::SECTIONS), Delay::from_millis(800 + 20 * 33));
        assert_eq!(page_offset(&[]), Delay::from_millis(800));
    }

    #[test]
    fn menu_items_only_stagger_while_open() {
        assert_eq!(menu_item(0, true).as_millis(), 300);
        assert_eq!(menu_item(3, true).as_millis(), 510);
        assert_eq!(menu_item(3, false), Delay::ZERO);
    }

    #[test]
    fn css_formats_whole_seconds() {
        assert_eq!(Delay::from_millis(1000).css(), "1s");
        assert_eq!(Delay::ZERO.to_string(), "0s");
        assert_eq!(service_card(1).animation_style(), "animation-delay: 1.05s");
    }
}
