//! Field identifiers and the typed record of field values.
//!
//! The contact form has a closed set of four fields. Every lookup goes
//! through [`FieldId`], so there is no way to ask for a field that does not
//! exist.

use std::fmt;

/// One of the four contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FieldId {
    /// First name, required, at least five characters.
    FirstName,
    /// Last name, required.
    LastName,
    /// Email address, required, `local@domain.tld`.
    Email,
    /// Free-text message, unconstrained.
    Message,
}

/// How a field is edited in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line text input.
    Text,
    /// Multi-line text area; its value is also its text content.
    MultiLine,
}

impl FieldId {
    /// All fields, in render order.
    pub const ALL: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Message,
    ];

    /// The name used in error messages and serialized records.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }

    /// Label text rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name*",
            FieldId::LastName => "Last Name*",
            FieldId::Email => "Email*",
            FieldId::Message => "Message",
        }
    }

    /// Caption used in the submitted summary.
    pub fn caption(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name:",
            FieldId::LastName => "Last Name:",
            FieldId::Email => "Email:",
            FieldId::Message => "Message:",
        }
    }

    /// Placeholder text, if the input shows one.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldId::FirstName => Some("Edd"),
            FieldId::LastName => Some("Burke"),
            FieldId::Email => Some("bluebill1049@hotmail.com"),
            FieldId::Message => None,
        }
    }

    /// Input widget for the field.
    pub fn input_kind(self) -> InputKind {
        match self {
            FieldId::Message => InputKind::MultiLine,
            _ => InputKind::Text,
        }
    }

    fn index(self) -> usize {
        match self {
            FieldId::FirstName => 0,
            FieldId::LastName => 1,
            FieldId::Email => 2,
            FieldId::Message => 3,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current text of every field.
///
/// All members start empty and change only through input events.
///
/// # Example
///
/// ```
/// use contact_form::{FieldId, FieldValues};
///
/// let mut values = FieldValues::default();
/// values.set(FieldId::FirstName, "Kennedy");
/// values.push_char(FieldId::FirstName, '!');
/// assert_eq!(values.get(FieldId::FirstName), "Kennedy!");
/// assert_eq!(values.email, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FieldValues {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl FieldValues {
    /// Borrow the value of `field`.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Append one typed character to `field`.
    pub fn push_char(&mut self, field: FieldId, c: char) {
        self.slot_mut(field).push(c);
    }

    /// Iterate over `(field, value)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// A fixed-size table with one slot per [`FieldId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PerField<T>([Option<T>; 4]);

impl<T> Default for PerField<T> {
    fn default() -> Self {
        PerField([None, None, None, None])
    }
}

impl<T> PerField<T> {
    pub(crate) fn get(&self, field: FieldId) -> Option<&T> {
        self.0[field.index()].as_ref()
    }

    pub(crate) fn set(&mut self, field: FieldId, value: Option<T>) {
        self.0[field.index()] = value;
    }

    pub(crate) fn take(&mut self, field: FieldId) -> Option<T> {
        self.0[field.index()].take()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (FieldId, &T)> + '_ {
        FieldId::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_field_order() {
        let names: Vec<_> = FieldId::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["firstName", "lastName", "email", "message"]);
    }

    #[test]
    fn test_only_message_is_multiline() {
        for field in FieldId::ALL {
            let expected = if field == FieldId::Message {
                InputKind::MultiLine
            } else {
                InputKind::Text
            };
            assert_eq!(field.input_kind(), expected);
        }
    }

    #[test]
    fn test_values_start_empty() {
        let values = FieldValues::default();
        assert!(values.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut values = FieldValues::default();
        values.set(FieldId::Email, "test@email.com");
        assert_eq!(values.email, "test@email.com");
        assert_eq!(values.get(FieldId::FirstName), "");
        assert_eq!(values.get(FieldId::Message), "");
    }

    #[test]
    fn test_per_field_iter_skips_empty_slots() {
        let mut table = PerField::default();
        table.set(FieldId::Email, Some(1));
        table.set(FieldId::FirstName, Some(2));
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(FieldId::FirstName, &2), (FieldId::Email, &1)]);
        assert_eq!(table.take(FieldId::Email), Some(1));
        assert_eq!(table.get(FieldId::Email), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_values_serialize_with_camel_case_keys() {
        let mut values = FieldValues::default();
        values.set(FieldId::FirstName, "Kennedy");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["firstName"], "Kennedy");
        assert_eq!(json["lastName"], "");

        let back: FieldValues = serde_json::from_str(r#"{"email":"test@email.com"}"#).unwrap();
        assert_eq!(back.email, "test@email.com");
        assert_eq!(back.first_name, "");
    }
}
