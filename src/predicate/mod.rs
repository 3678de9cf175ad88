//! Predicate combinators for composable validation logic
//!
//! Every rule of the contact form schema boils down to a predicate over the
//! field's current text. Predicates can be combined using logical operators
//! (`and`, `or`, `not`) to build rules from simple, reusable pieces.
//!
//! # Example
//!
//! ```rust
//! use contact_form::predicate::*;
//!
//! let first_name = not_blank().and(len_min(5));
//! assert!(first_name.check("Kennedy"));
//! assert!(!first_name.check("boo"));
//! ```
//!
//! # Integration with Validation
//!
//! ```rust
//! use contact_form::{Validation, predicate::*};
//!
//! let result = validate("test@email.com", email_shape(), "not an email");
//! assert_eq!(result, Validation::success("test@email.com"));
//! ```

mod combinators;
mod string;
mod validation;

pub mod prelude;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use string::{email_shape, len_min, not_blank, not_empty, EmailShape, LenMin, NotBlank, NotEmpty};

pub use validation::validate;
