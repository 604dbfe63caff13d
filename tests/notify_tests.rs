// Host-side tests for toast timing and markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod notify {
    include!("../src/core/notify.rs");
}

use notify::*;

#[test]
fn toast_is_removed_between_five_and_five_point_four_seconds() {
    let t = ToastTimeline::default();
    assert!(t.remove_at_ms >= 5000);
    assert!(t.remove_at_ms <= 5400);
    assert!(t.enter_at_ms < t.exit_at_ms);
    assert!(t.exit_at_ms < t.remove_at_ms);
}

#[test]
fn kinds_map_to_distinct_presentation() {
    assert_eq!(NotificationKind::Success.class_name(), "success");
    assert_eq!(NotificationKind::Error.class_name(), "error");
    assert_eq!(NotificationKind::Success.icon_class(), "fa-check-circle");
    assert_eq!(NotificationKind::Error.icon_class(), "fa-exclamation-circle");
    assert_ne!(
        NotificationKind::Success.background(),
        NotificationKind::Error.background()
    );
}

#[test]
fn markup_escapes_message_text() {
    let html = toast_markup("<b>hi</b> & \"bye\"", NotificationKind::Error);
    assert_eq!(
        html,
        "<i class=\"fas fa-exclamation-circle\"></i>\
         <span>&lt;b&gt;hi&lt;/b&gt; &amp; &quot;bye&quot;</span>"
    );
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(
        escape_html("Message sent successfully! I'll get back to you soon."),
        "Message sent successfully! I&#39;ll get back to you soon."
    );
}
