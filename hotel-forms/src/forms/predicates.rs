//! Format predicates shared by every form on the site

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex")
});

// Latin letters plus the U+00C0..U+00FF block, whitespace, apostrophes and hyphens
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\x{C0}-\x{FF}\s'-]+$").expect("Invalid regex"));

/// Check an address against `local-part@domain.tld`
///
/// # Examples
///
/// ```rust
/// use hotel_forms::forms::is_valid_email;
///
/// assert!(is_valid_email("guest@hotel.bg"));
/// assert!(!is_valid_email("a@b"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check that a personal name holds only letters, spaces, apostrophes and hyphens
///
/// # Examples
///
/// ```rust
/// use hotel_forms::forms::is_valid_name;
///
/// assert!(is_valid_name("Mary-Jane O'Neil"));
/// assert!(!is_valid_name("John3"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "guest@hotel.bg",
            "first.last+tag@mail.example.com",
            "UPPER_case%x@Domain.ORG",
            "a-b@sub-domain.co",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "abc",
            "a@b",
            "a@b.c",
            "@hotel.bg",
            "guest@.bg1",
            "guest@hotel.b9",
            "guest hotel@x.bg",
            "",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_valid_names() {
        for name in ["Ivan Ivanov", "Mary-Jane O'Neil", "José Müller", "Zoë"] {
            assert!(is_valid_name(name), "{name}");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["John3", "Ivan!", "a.b", "Иван", ""] {
            assert!(!is_valid_name(name), "{name}");
        }
    }

    proptest! {
        #[test]
        fn names_with_digits_are_rejected(
            prefix in "[a-zA-Z]{0,8}",
            digit in "[0-9]",
            suffix in "[a-zA-Z]{0,8}",
        ) {
            let name = format!("{prefix}{digit}{suffix}");
            prop_assert!(!is_valid_name(&name));
        }

        #[test]
        fn names_from_allowed_alphabet_are_accepted(name in "[a-zA-Z][a-zA-Z '-]{0,20}") {
            prop_assert!(is_valid_name(&name));
        }

        #[test]
        fn well_formed_emails_are_accepted(
            local in "[a-z0-9._%+-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-zA-Z]{2,6}",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn addresses_without_at_sign_are_rejected(text in "[a-z0-9.]{0,20}") {
            prop_assert!(!is_valid_email(&text));
        }
    }
}
