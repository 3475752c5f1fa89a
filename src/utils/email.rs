use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is empty")]
    Empty,
    #[error("Not a valid email address: {0}")]
    Malformed(String),
}

/// An address that passed the signup form's format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(EmailError::Malformed(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Toast text shown after the newsletter form is submitted.
pub fn subscription_message(input: &str) -> String {
    match EmailAddress::parse(input) {
        Ok(email) => format!("Subscribed with email: {}", email),
        Err(e) => {
            log::debug!("Rejected newsletter signup: {}", e);
            "Please enter a valid E-Mail address!".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plus_addressing_and_subdomains() {
        let email = EmailAddress::parse("a.b+c@shoes.example.com").unwrap();
        assert_eq!(email.as_str(), "a.b+c@shoes.example.com");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let email = EmailAddress::parse("  runner@solesavvy.io \n").unwrap();
        assert_eq!(email.to_string(), "runner@solesavvy.io");
    }

    #[test]
    fn rejects_empty_and_malformed_addresses() {
        assert_eq!(EmailAddress::parse("   "), Err(EmailError::Empty));
        for bad in ["plainaddress", "a@b", "a@b.c", "@shoes.com", "two@@shoes.com"] {
            assert!(
                matches!(EmailAddress::parse(bad), Err(EmailError::Malformed(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn subscription_message_reflects_validity() {
        assert_eq!(
            subscription_message("walker@shoes.com"),
            "Subscribed with email: walker@shoes.com"
        );
        assert_eq!(
            subscription_message("walker"),
            "Please enter a valid E-Mail address!"
        );
    }
}
