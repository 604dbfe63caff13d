use thiserror::Error;

/// Why a contact submission was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// The four fields of the contact form as read from its form data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from a field lookup; absent fields read as empty.
    pub fn from_fields(mut get: impl FnMut(&str) -> Option<String>) -> Self {
        let mut field = |name: &str| get(name).unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    /// Emptiness is checked before the email shape.
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Loose `local@domain.tld` shape check.
///
/// Exactly one `@`, no whitespace anywhere, a non-empty local part, and a
/// domain containing a `.` with at least one character on either side.
/// Whitespace is the browser regex `\s` class (see [`is_js_whitespace`]).
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// ECMAScript WhiteSpace and LineTerminator code points, i.e. the regex `\s`
/// class. Differs from `char::is_whitespace`: includes U+FEFF, excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
