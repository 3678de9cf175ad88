//! Validation type for accumulating errors
//!
//! This module provides the `Validation` type, which is similar to `Result` but designed
//! specifically for validation scenarios where we want to accumulate all errors rather than
//! short-circuiting on the first failure. A contact form submission is exactly that
//! scenario: every failing field has to be reported in the same render.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use contact_form::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["error1"]);
//! let v2 = Validation::<i32, _>::failure(vec!["error2"]);
//! let result = v1.and(v2);
//!
//! assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
//! ```
//!
//! ## Validating tuples
//!
//! ```
//! use contact_form::{Validation, validation::ValidateAll};
//!
//! let result = (
//!     Validation::<_, Vec<&str>>::success(1),
//!     Validation::<_, Vec<&str>>::success(2),
//!     Validation::<_, Vec<&str>>::success(3),
//!     Validation::<_, Vec<&str>>::success(4),
//! ).validate_all();
//!
//! assert_eq!(result, Validation::Success((1, 2, 3, 4)));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// Unlike `Result`, `Validation` is designed to accumulate multiple errors when combining
/// validations.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
///
/// # Examples
///
/// ```
/// use contact_form::Validation;
///
/// let v = Validation::<_, Vec<&str>>::success(42);
/// assert_eq!(v.into_result(), Ok(42));
///
/// let v1 = Validation::<i32, _>::failure(vec!["error1"]);
/// let v2 = Validation::<i32, _>::failure(vec!["error2"]);
/// assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_form::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_form::Validation;
    ///
    /// let v = Validation::<i32, _>::failure("error".to_string());
    /// assert_eq!(v.into_result(), Err("error".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the error, if any.
    #[inline]
    pub fn failure_ref(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_form::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_form::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["error"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is successful, so
    /// this is the short-circuiting counterpart of [`Validation::and`]. Ordered
    /// rules on a single field are chained this way: only the first failing
    /// rule is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_form::Validation;
    ///
    /// let v = Validation::<_, &str>::success(5);
    /// let result = v.and_then(|x| {
    ///     if x > 0 {
    ///         Validation::success(x * 2)
    ///     } else {
    ///         Validation::failure("must be positive")
    ///     }
    /// });
    /// assert_eq!(result, Validation::Success(10));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the errors using `Semigroup::combine`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

impl<T, E> Validation<T, E> {
    /// Combine all validations in a tuple
    ///
    /// This is a convenience method that delegates to the `ValidateAll` trait.
    /// It works with tuples of four validations, one slot per form field.
    pub fn all<V, E2>(validations: V) -> Validation<V::Output, E2>
    where
        E2: Semigroup,
        V: ValidateAll<E2>,
    {
        validations.validate_all()
    }
}

/// Trait for combining multiple validations in a tuple
///
/// This trait is implemented for four-tuples of validations, allowing the
/// `Validation::all` method to work with heterogeneous validation types.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

impl<E: Semigroup, T1, T2, T3, T4> ValidateAll<E>
    for (
        Validation<T1, E>,
        Validation<T2, E>,
        Validation<T3, E>,
        Validation<T4, E>,
    )
{
    type Output = (T1, T2, T3, T4);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (a, b, c, d) = self;
        a.and(b)
            .and(c)
            .map(|((a, b), c)| (a, b, c))
            .and(d)
            .map(|((a, b, c), d)| (a, b, c, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let v = Validation::<_, Vec<&str>>::success(42);
        assert!(v.is_success());
        assert!(!v.is_failure());
    }

    #[test]
    fn test_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert!(v.is_failure());
        assert_eq!(v.failure_ref(), Some(&vec!["error"]));
    }

    #[test]
    fn test_from_result_err() {
        let v = Validation::from_result(Err::<i32, _>(vec!["error"]));
        assert_eq!(v, Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_into_result_success() {
        let v = Validation::<_, Vec<&str>>::success(42);
        assert_eq!(v.into_result(), Ok(42));
    }

    #[test]
    fn test_map_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        let result = v.map(|x| x * 2);
        assert_eq!(result, Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_map_err_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["error1", "error2"]);
        let result = v.map_err(|errors| errors.len());
        assert_eq!(result, Validation::Failure(2));
    }

    #[test]
    fn test_and_both_failure() {
        let v1 = Validation::<i32, _>::failure(vec!["error1"]);
        let v2 = Validation::<i32, _>::failure(vec!["error2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    }

    #[test]
    fn test_and_second_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_and_then_stops_at_first_failure() {
        let v = Validation::<i32, _>::failure("required");
        let mut called = false;
        let result = v.and_then(|x| {
            called = true;
            Validation::success(x)
        });
        assert_eq!(result, Validation::Failure("required"));
        assert!(!called);
    }

    #[test]
    fn test_all_four_success() {
        let result = (
            Validation::<_, Vec<&str>>::success(1),
            Validation::<_, Vec<&str>>::success(2),
            Validation::<_, Vec<&str>>::success(3),
            Validation::<_, Vec<&str>>::success(4),
        )
            .validate_all();
        assert_eq!(result, Validation::Success((1, 2, 3, 4)));
    }

    #[test]
    fn test_all_four_accumulates_in_order() {
        let result = Validation::<(), Vec<&str>>::all((
            Validation::<i32, _>::failure(vec!["firstName"]),
            Validation::<i32, _>::failure(vec!["lastName"]),
            Validation::<i32, _>::failure(vec!["email"]),
            Validation::<_, Vec<&str>>::success(4),
        ));
        assert_eq!(
            result,
            Validation::Failure(vec!["firstName", "lastName", "email"])
        );
    }

}
