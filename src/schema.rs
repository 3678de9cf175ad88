//! Declarative validation schema for the contact form.
//!
//! Each field owns an ordered list of [`Rule`]s. Validating a field runs the
//! rules in order and reports only the first one that fails; validating the
//! whole form runs every field and accumulates one error per failing field.
//!
//! ```
//! use contact_form::{FieldId, Rule, ValidationSchema};
//!
//! let schema = ValidationSchema::contact();
//! let err = schema.validate_field(FieldId::FirstName, "boo").into_result().unwrap_err();
//! assert_eq!(err.rule, Rule::MinLength(5));
//! ```

use crate::error::{ErrorMap, FieldError};
use crate::field::{FieldId, FieldValues, PerField};
use crate::predicate::{email_shape, len_min, not_blank, validate, Predicate};
use crate::Validation;

/// A single constraint on a field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming whitespace.
    Required,
    /// At least this many characters, ignoring surrounding whitespace.
    MinLength(usize),
    /// Shaped like `local@domain.tld`.
    EmailShape,
}

impl Predicate<str> for Rule {
    fn check(&self, value: &str) -> bool {
        match *self {
            Rule::Required => not_blank().check(value),
            Rule::MinLength(min) => len_min(min).check(value.trim()),
            Rule::EmailShape => email_shape().check(value),
        }
    }
}

/// Ordered rules for one field.
///
/// ```
/// use contact_form::{FieldRules, Rule};
///
/// let rules = FieldRules::new().required().min_length(5);
/// assert_eq!(rules.as_slice(), &[Rule::Required, Rule::MinLength(5)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules(Vec<Rule>);

impl FieldRules {
    /// No rules; the field always passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.0.push(rule);
        self
    }

    /// Append [`Rule::Required`].
    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    /// Append [`Rule::MinLength`].
    pub fn min_length(self, min: usize) -> Self {
        self.rule(Rule::MinLength(min))
    }

    /// Append [`Rule::EmailShape`].
    pub fn email(self) -> Self {
        self.rule(Rule::EmailShape)
    }

    /// The rules in evaluation order.
    pub fn as_slice(&self) -> &[Rule] {
        &self.0
    }

    /// True when no rule is attached.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rules for every field of the form. Immutable once handed to a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSchema {
    fields: PerField<FieldRules>,
}

impl ValidationSchema {
    /// A schema with no rules at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// The contact form rules.
    ///
    /// Email checks its shape before checking presence, so an empty email
    /// reports the "valid email address" message.
    pub fn contact() -> Self {
        Self::new()
            .field(FieldId::FirstName, FieldRules::new().required().min_length(5))
            .field(FieldId::LastName, FieldRules::new().required())
            .field(FieldId::Email, FieldRules::new().email().required())
    }

    /// Replace the rules for `field`.
    pub fn field(mut self, field: FieldId, rules: FieldRules) -> Self {
        self.fields.set(field, Some(rules));
        self
    }

    /// Rules for `field` in evaluation order.
    pub fn rules(&self, field: FieldId) -> &[Rule] {
        self.fields.get(field).map(FieldRules::as_slice).unwrap_or(&[])
    }

    /// Whether a failure on `field` can block submission.
    pub fn gates_submission(&self, field: FieldId) -> bool {
        !self.rules(field).is_empty()
    }

    /// Run the rules for one field, stopping at the first failure.
    pub fn validate_field<'a>(&self, field: FieldId, value: &'a str) -> Validation<&'a str, FieldError> {
        self.rules(field)
            .iter()
            .fold(Validation::success(value), |acc, &rule| {
                acc.and_then(|v| validate(v, rule, FieldError::new(field, rule)))
            })
    }

    /// First failing rule of `field`, if any.
    pub fn error_for(&self, field: FieldId, value: &str) -> Option<FieldError> {
        self.validate_field(field, value).failure_ref().copied()
    }

    /// Validate every field, collecting one error per failing field.
    pub fn validate<'a>(&self, values: &'a FieldValues) -> Validation<&'a FieldValues, ErrorMap> {
        let check = |field: FieldId| {
            self.validate_field(field, values.get(field))
                .map_err(ErrorMap::single)
        };

        Validation::<(), ErrorMap>::all((
            check(FieldId::FirstName),
            check(FieldId::LastName),
            check(FieldId::Email),
            check(FieldId::Message),
        ))
        .map(|_| values)
    }
}
