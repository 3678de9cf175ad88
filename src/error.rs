//! Field validation errors and the per-field error map.

use std::fmt;

use crate::field::{FieldId, PerField};
use crate::schema::Rule;
use crate::Semigroup;

/// A failed rule on a single field.
///
/// The `Display` output is the exact message rendered under the input.
///
/// ```
/// use contact_form::{FieldError, FieldId, Rule};
///
/// let err = FieldError::new(FieldId::LastName, Rule::Required);
/// assert_eq!(err.to_string(), "Error: lastName is a required field.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Field the rule belongs to.
    pub field: FieldId,
    /// The first rule the value failed.
    pub rule: Rule,
}

impl FieldError {
    /// Create an error for `field` failing `rule`.
    pub fn new(field: FieldId, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// The rendered message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {} ", self.field.name())?;
        match self.rule {
            Rule::Required => f.write_str("is a required field."),
            Rule::MinLength(min) => write!(f, "must have at least {min} characters."),
            Rule::EmailShape => f.write_str("must be a valid email address."),
        }
    }
}

/// Current error of each field, if any.
///
/// A field has an entry only while its value fails a rule. Combining two
/// maps keeps the left entry when both have one for the same field, so a
/// combination never reorders which error a field reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: PerField<FieldError>,
}

impl ErrorMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding just `error`.
    pub fn single(error: FieldError) -> Self {
        let mut map = Self::new();
        map.insert(error);
        map
    }

    /// The error for `field`, if it is failing.
    pub fn get(&self, field: FieldId) -> Option<&FieldError> {
        self.entries.get(field)
    }

    /// Store `error` under its field, replacing any previous entry.
    pub fn insert(&mut self, error: FieldError) {
        self.entries.set(error.field, Some(error));
    }

    /// Drop the entry for `field`.
    pub fn remove(&mut self, field: FieldId) -> Option<FieldError> {
        self.entries.take(field)
    }

    /// Set or clear the entry for `field`.
    pub fn update(&mut self, field: FieldId, error: Option<FieldError>) {
        debug_assert!(error.map_or(true, |e| e.field == field));
        self.entries.set(field, error);
    }

    /// Whether `field` currently has an error.
    pub fn contains(&self, field: FieldId) -> bool {
        self.get(field).is_some()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no field is failing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> + '_ {
        self.entries.iter().map(|(_, error)| error)
    }

    /// Rendered messages in field order.
    pub fn messages(&self) -> Vec<String> {
        self.iter().map(FieldError::message).collect()
    }
}

impl Semigroup for ErrorMap {
    fn combine(mut self, other: Self) -> Self {
        for error in other.iter() {
            if !self.contains(error.field) {
                self.insert(*error);
            }
        }
        self
    }
}

impl FromIterator<FieldError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        iter.into_iter()
            .map(ErrorMap::single)
            .fold(ErrorMap::new(), Semigroup::combine)
    }
}
