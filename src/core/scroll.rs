use crate::constants::{
    HEADER_OFFSET_PX, HERO_PARALLAX_FACTOR, NAVBAR_SCROLLED_AFTER_PX, REVEAL_VIEWPORT_DIVISOR,
    SCROLL_TOP_VISIBLE_AFTER_PX, SECTION_ACTIVATION_OFFSET_PX,
};

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER_PX
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER_PX
}

/// Vertical hero offset in pixels for the parallax effect.
#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_PARALLAX_FACTOR
}

/// Document offset to smooth-scroll to so a section clears the fixed header.
#[inline]
pub fn scroll_target_for(section_offset_top: f64) -> f64 {
    section_offset_top - HEADER_OFFSET_PX
}

/// Id of the section the nav should highlight.
///
/// `sections` yields `(id, offset_top)` in document order. The last section
/// whose top is at or above `scroll_y + 200` wins.
pub fn active_section<'a, I>(sections: I, scroll_y: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_ACTIVATION_OFFSET_PX)
        .last()
        .map(|(id, _)| id)
}

/// Nav link target that corresponds to a section id.
pub fn nav_href(section_id: &str) -> String {
    format!("#{}", section_id)
}

/// Whether a reveal element counts as in view.
#[inline]
pub fn in_view(element_top: f64, viewport_height: f64) -> bool {
    element_top <= viewport_height / REVEAL_VIEWPORT_DIVISOR
}

/// Whether a revealed element may be hidden again after scrolling away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    Once,
    Toggle,
}

/// Reveal markers stay once added.
pub const REVEAL_MODE: RevealMode = RevealMode::Once;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Reveal,
    Conceal,
}

/// What a scroll tick should do to one tracked element, if anything.
pub fn reveal_action(
    element_top: f64,
    viewport_height: f64,
    mode: RevealMode,
) -> Option<RevealAction> {
    if in_view(element_top, viewport_height) {
        Some(RevealAction::Reveal)
    } else if mode == RevealMode::Toggle {
        Some(RevealAction::Conceal)
    } else {
        None
    }
}
