// Host-side tests for contact form validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod form {
    include!("../src/core/form.rs");
}

use form::*;

fn filled() -> ContactMessage {
    ContactMessage {
        name: "Ada".into(),
        email: "user@example.com".into(),
        subject: "Hello".into(),
        message: "Nice portfolio".into(),
    }
}

#[test]
fn complete_message_is_accepted() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn any_empty_field_is_rejected_before_sending() {
    let blanks: [fn(&mut ContactMessage); 4] = [
        |m| m.name.clear(),
        |m| m.email.clear(),
        |m| m.subject.clear(),
        |m| m.message.clear(),
    ];
    for blank in blanks {
        let mut msg = filled();
        blank(&mut msg);
        assert_eq!(msg.validate(), Err(FormError::MissingFields));
    }
}

#[test]
fn empty_fields_win_over_bad_email() {
    let msg = ContactMessage {
        email: "bad-email".into(),
        subject: String::new(),
        ..filled()
    };
    assert_eq!(msg.validate(), Err(FormError::MissingFields));
}

#[test]
fn malformed_email_is_rejected() {
    let msg = ContactMessage {
        email: "a@b".into(),
        ..filled()
    };
    assert_eq!(msg.validate(), Err(FormError::InvalidEmail));
}

#[test]
fn email_shape_examples() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@sub.example.co"));
    assert!(!is_valid_email("bad-email"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a @b.c"));
    assert!(!is_valid_email("a@b .c"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("a@@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
    assert!(!is_valid_email("a@example."));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn missing_fields_read_as_empty() {
    let msg = ContactMessage::from_fields(|name| match name {
        "name" => Some("Ada".to_string()),
        "email" => Some("user@example.com".to_string()),
        _ => None,
    });
    assert_eq!(msg.subject, "");
    assert_eq!(msg.message, "");
    assert_eq!(msg.validate(), Err(FormError::MissingFields));
}

#[test]
fn errors_carry_user_facing_text() {
    assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields");
    assert_eq!(
        FormError::InvalidEmail.to_string(),
        "Please enter a valid email address"
    );
}

#[test]
fn whitespace_follows_browser_regex_class() {
    assert!(!is_valid_email("a\u{FEFF}@b.c"));
    assert!(!is_valid_email("a\u{00A0}@b.c"));
    assert!(!is_valid_email("a@b.c\u{2028}"));
    assert!(!is_valid_email("a\t@b.c"));
    // NEL is not whitespace to the browser regex.
    assert!(is_valid_email("a\u{85}@b.c"));
    assert!(is_js_whitespace('\u{000B}'));
    assert!(!is_js_whitespace('\u{200B}'));
}
