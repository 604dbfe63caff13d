use crate::constants::{TOAST_ENTER_DELAY_MS, TOAST_EXIT_MS, TOAST_VISIBLE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "linear-gradient(135deg, #10b981, #059669)",
            NotificationKind::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
        }
    }
}

/// Offsets of a toast's lifecycle, in ms after creation.
///
/// Fields:
/// - `enter_at_ms`: slide-in transform applied
/// - `exit_at_ms`: slide-out transform applied
/// - `remove_at_ms`: node detached from the body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimeline {
    pub enter_at_ms: u32,
    pub exit_at_ms: u32,
    pub remove_at_ms: u32,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self {
            enter_at_ms: TOAST_ENTER_DELAY_MS,
            exit_at_ms: TOAST_VISIBLE_MS,
            remove_at_ms: TOAST_VISIBLE_MS + TOAST_EXIT_MS,
        }
    }
}

/// Minimal HTML escaping for toast text.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of a toast: kind icon followed by the message.
pub fn toast_markup(message: &str, kind: NotificationKind) -> String {
    format!(
        "<i class=\"fas {}\"></i><span>{}</span>",
        kind.icon_class(),
        escape_html(message)
    )
}
