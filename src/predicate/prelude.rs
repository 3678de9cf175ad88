//! Predicate prelude for convenient imports
//!
//! ```rust
//! use contact_form::predicate::prelude::*;
//!
//! let valid = not_blank().and(len_min(5));
//! assert!(valid.check("Kennedy"));
//! ```

pub use super::combinators::{And, Not, Or, Predicate, PredicateExt};

pub use super::string::{email_shape, len_min, not_blank, not_empty};

pub use super::validation::validate;
