// Host-side tests for scroll-derived navigation and reveal decisions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

const SECTIONS: [(&str, f64); 4] = [
    ("home", 0.0),
    ("about", 800.0),
    ("portfolio", 1600.0),
    ("contact", 2400.0),
];

#[test]
fn navbar_marker_tracks_threshold() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(100.0));
    assert!(navbar_scrolled(100.5));
    // Repeated ticks at one position agree.
    for _ in 0..3 {
        assert!(navbar_scrolled(250.0));
        assert!(!navbar_scrolled(40.0));
    }
}

#[test]
fn scroll_top_button_threshold() {
    assert!(!scroll_top_visible(300.0));
    assert!(scroll_top_visible(301.0));
    assert!(scroll_top_visible(450.0));
    assert!((parallax_offset(450.0) - 135.0).abs() < 1e-9);
}

#[test]
fn active_section_is_last_within_offset() {
    assert_eq!(active_section(SECTIONS, 0.0), Some("home"));
    assert_eq!(active_section(SECTIONS, 599.0), Some("home"));
    assert_eq!(active_section(SECTIONS, 600.0), Some("about"));
    assert_eq!(active_section(SECTIONS, 1500.0), Some("portfolio"));
    assert_eq!(active_section(SECTIONS, 10_000.0), Some("contact"));
}

#[test]
fn no_section_reached_means_no_highlight() {
    let sections = [("about", 900.0), ("contact", 1800.0)];
    assert_eq!(active_section(sections, 100.0), None);
    assert_eq!(active_section(std::iter::empty(), 100.0), None);
}

#[test]
fn later_sections_override_earlier_ones() {
    // Document order wins even when offsets are not increasing.
    let sections = [("a", 0.0), ("b", 500.0), ("c", 100.0)];
    assert_eq!(active_section(sections, 700.0), Some("c"));
}

#[test]
fn smooth_scroll_clears_header() {
    assert_eq!(scroll_target_for(800.0), 720.0);
    assert_eq!(nav_href("about"), "#about");
}

#[test]
fn reveal_threshold_uses_viewport_fraction() {
    assert!(in_view(800.0, 1000.0));
    assert!(!in_view(800.1, 1000.0));
    assert!(in_view(-50.0, 1000.0));
}

#[test]
fn reveal_once_never_conceals() {
    assert_eq!(
        reveal_action(100.0, 1000.0, RevealMode::Once),
        Some(RevealAction::Reveal)
    );
    assert_eq!(reveal_action(900.0, 1000.0, RevealMode::Once), None);
    assert_eq!(REVEAL_MODE, RevealMode::Once);
}

#[test]
fn reveal_toggle_conceals_out_of_view() {
    assert_eq!(
        reveal_action(900.0, 1000.0, RevealMode::Toggle),
        Some(RevealAction::Conceal)
    );
    assert_eq!(
        reveal_action(10.0, 1000.0, RevealMode::Toggle),
        Some(RevealAction::Reveal)
    );
}
