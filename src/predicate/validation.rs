//! Validation integration for predicates
//!
//! This module provides integration between predicates and the `Validation` type.

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use contact_form::{Validation, predicate::*};
///
/// let result = validate("Kennedy", len_min(5), "too short");
/// assert_eq!(result, Validation::success("Kennedy"));
///
/// let result = validate("boo", len_min(5), "too short");
/// assert_eq!(result, Validation::failure("too short"));
/// ```
pub fn validate<'a, T, E, P>(value: &'a T, predicate: P, error: E) -> Validation<&'a T, E>
where
    T: ?Sized,
    P: Predicate<T>,
{
    if predicate.check(value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{email_shape, len_min, not_blank, PredicateExt};

    #[test]
    fn test_validate_success() {
        let result = validate("hello", len_min(3), "too short");
        assert_eq!(result, Validation::success("hello"));
    }

    #[test]
    fn test_validate_failure() {
        let result = validate("hi", len_min(3), "too short");
        assert_eq!(result, Validation::failure("too short"));
    }

    #[test]
    fn test_validate_chain() {
        let first_name = not_blank().and(len_min(5));
        assert!(validate("Kennedy", first_name, "invalid").is_success());
        assert!(validate("     ", first_name, "invalid").is_failure());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate("test@email.com", email_shape(), "bad").is_success());
        assert!(validate("hello", email_shape(), "bad").is_failure());
    }
}
