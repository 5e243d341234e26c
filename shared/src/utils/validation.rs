//! Input format validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

// E.164-ish phone numbers: optional +, 9 to 15 digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?1?\d{9,15}$").unwrap());

// Pragmatic email shape check; the mail relay is the final arbiter
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is acceptable
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    PHONE_REGEX.is_match(&normalized)
}

/// Check if an email address is acceptable
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a verification code is exactly six ASCII digits
pub fn is_valid_code(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

/// Minimal password strength gate: length only, the rest is policy upstream
pub fn is_acceptable_password(password: &str) -> bool {
    password.len() >= 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+250 788 123 456"), "+250788123456");
        assert_eq!(normalize_phone_number("(078) 812-3456"), "0788123456");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+250788123456"));
        assert!(is_valid_phone("0788123456"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("not-a-phone"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("rider@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.rw"));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("user@nodot"));
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("123456"));
        assert!(!is_valid_code("12345"));
        assert!(!is_valid_code("12345a"));
    }

    #[test]
    fn test_is_acceptable_password() {
        assert!(is_acceptable_password("longenough"));
        assert!(!is_acceptable_password("short"));
    }
}
