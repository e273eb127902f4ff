// SPDX-License-Identifier: MPL-2.0
//! Contact form validation and submission status.

/// Validates an email address: one `@` separating a non-empty local part
/// from a domain containing a dot that splits non-empty labels, and no
/// whitespace anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    let (label, rest) = domain.split_at(dot);
    !label.is_empty() && rest.len() > 1
}

/// Per-field validation errors, shown as inline lines under the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    /// Validates the three fields, trimming name and message.
    #[must_use]
    pub fn validate(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name
                .trim()
                .is_empty()
                .then_some("Please enter your name."),
            email: (!is_valid_email(email)).then_some("Please enter a valid email address."),
            message: message
                .trim()
                .is_empty()
                .then_some("Please enter a message."),
        }
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Submission lifecycle shown as the form's status line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    /// Status line text; empty while idle.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            SubmitStatus::Idle => "",
            SubmitStatus::Sending => "Sending…",
            SubmitStatus::Sent => "Thanks! Your message has been sent.",
            SubmitStatus::Failed(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jo.bloggs+tanks@example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("plainaddress"));
    }

    #[test]
    fn validate_flags_each_field() {
        let errors = FieldErrors::validate("  ", "nope", "");
        assert_eq!(errors.name, Some("Please enter your name."));
        assert_eq!(errors.email, Some("Please enter a valid email address."));
        assert_eq!(errors.message, Some("Please enter a message."));
        assert!(!errors.is_clear());
    }

    #[test]
    fn validate_passes_good_input() {
        let errors = FieldErrors::validate("Jo", "a@b.co", "Do you stock shrimp?");
        assert!(errors.is_clear());
    }

    #[test]
    fn status_labels() {
        assert_eq!(SubmitStatus::Idle.label(), "");
        assert_eq!(SubmitStatus::Sending.label(), "Sending…");
        assert_eq!(
            SubmitStatus::Sent.label(),
            "Thanks! Your message has been sent."
        );
        assert_eq!(SubmitStatus::Failed("oops".into()).label(), "oops");
    }
}
