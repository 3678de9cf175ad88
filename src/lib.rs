//! # contact_form
//!
//! A headless contact form: four typed fields, a declarative validation
//! schema, and a view tree that shows inline errors and, after a successful
//! submit, a summary of what was sent.
//!
//! ## Quick Example
//!
//! ```rust
//! use contact_form::{ContactForm, FieldId};
//!
//! let mut form = ContactForm::new();
//!
//! // Every keystroke re-validates the edited field.
//! form.type_text(FieldId::FirstName, "boo");
//! assert_eq!(
//!     form.errors().messages(),
//!     vec!["Error: firstName must have at least 5 characters.".to_string()]
//! );
//!
//! // Submit re-validates everything and reports every failing field at once.
//! let outcome = form.submit();
//! assert!(!outcome.is_accepted());
//! assert_eq!(form.errors().len(), 3);
//!
//! form.change(FieldId::FirstName, "Kennedy");
//! form.type_text(FieldId::LastName, "Bryant");
//! form.type_text(FieldId::Email, "test@email.com");
//! assert!(form.submit().is_accepted());
//! assert!(form.is_submitted());
//! ```
//!
//! Validation is built on [`Validation`], which accumulates errors through a
//! [`Semigroup`] instead of stopping at the first failure, and on the
//! composable rules in [`predicate`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod field;
pub mod form;
pub mod predicate;
pub mod schema;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod view;

// Re-exports
pub use error::{ErrorMap, FieldError};
pub use field::{FieldId, FieldValues, InputKind};
pub use form::{ContactForm, FormEvent, FormPhase, SubmitOutcome};
pub use schema::{FieldRules, Rule, ValidationSchema};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorMap, FieldError};
    pub use crate::field::{FieldId, FieldValues};
    pub use crate::form::{ContactForm, FormEvent, FormPhase, SubmitOutcome};
    pub use crate::schema::{FieldRules, Rule, ValidationSchema};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
