//! String predicates
//!
//! Predicates over `str` used by the contact form rules. Lengths are counted
//! in `char`s, so "Zoë" has length 3.

use email_address::{EmailAddress, Options};

use super::combinators::Predicate;

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// # Example
///
/// ```rust
/// use contact_form::predicate::*;
///
/// assert!(not_empty().check("hello"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string has content other than whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Create a predicate that checks if a string is non-empty after trimming.
///
/// # Example
///
/// ```rust
/// use contact_form::predicate::*;
///
/// assert!(not_blank().check(" Bryant "));
/// assert!(!not_blank().check("   "));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate that checks a string has at least `min` characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenMin {
    min: usize,
}

impl Predicate<str> for LenMin {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().count() >= self.min
    }
}

/// Create a predicate that checks if string length is at least min.
///
/// # Example
///
/// ```rust
/// use contact_form::predicate::*;
///
/// assert!(len_min(5).check("Kennedy"));
/// assert!(!len_min(5).check("boo"));
/// ```
pub fn len_min(min: usize) -> LenMin {
    LenMin { min }
}

/// Predicate for the `local@domain.tld` shape of an email address.
///
/// Parsing is delegated to [`email_address`] with a required top-level
/// domain, so quoted local parts, internationalized domains and domain
/// literals are accepted while `user@localhost` is not.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmailShape;

impl Predicate<str> for EmailShape {
    fn check(&self, value: &str) -> bool {
        EmailAddress::parse_with_options(value, Options::default().with_required_tld()).is_ok()
    }
}

/// Create a predicate that checks if a string looks like `local@domain.tld`.
///
/// # Example
///
/// ```rust
/// use contact_form::predicate::*;
///
/// assert!(email_shape().check("test@email.com"));
/// assert!(!email_shape().check("hello"));
/// assert!(!email_shape().check(""));
/// ```
pub fn email_shape() -> EmailShape {
    EmailShape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().check("hello"));
        assert!(!not_empty().check(""));
    }

    #[test]
    fn test_not_blank_trims() {
        assert!(not_blank().check("  x "));
        assert!(!not_blank().check(""));
        assert!(!not_blank().check(" \t\n"));
    }

    #[test]
    fn test_len_min_counts_chars_not_bytes() {
        assert!(len_min(5).check("Zoëlé"));
        assert!(!len_min(5).check("Zoë"));
        assert!(len_min(0).check(""));
    }

    #[test]
    fn test_email_shape_accepts_common_addresses() {
        for email in [
            "test@email.com",
            "bluebill1049@hotmail.com",
            "first.last+tag@sub.example.co",
            "a@b-c.io",
        ] {
            assert!(email_shape().check(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_email_shape_accepts_idn_and_quoted_addresses() {
        for email in [
            "user@bücher.de",
            "\"john doe\"@example.com",
            "user@[192.168.0.1]",
            "a@b.xn--p1ai",
        ] {
            assert!(email_shape().check(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_email_shape_rejects_malformed_addresses() {
        for email in [
            "",
            "hello",
            "@email.com",
            "test@",
            "test@email",
            "test@@email.com",
            "te st@email.com",
            "test@email..com",
            "test@email.com again",
        ] {
            assert!(!email_shape().check(email), "{email:?} should be rejected");
        }
    }
}
