//! Testing utilities for the contact form.
//!
//! [`Screen`] drives a [`ContactForm`] the way a user does: it finds elements
//! by what is visible on the page, types into inputs keystroke by keystroke
//! and clicks buttons. The rendered tree is refreshed from the form's render
//! listener after every event.
//!
//! # Examples
//!
//! ```rust
//! use contact_form::testing::{Screen, TextMatch};
//! use contact_form::view::Role;
//!
//! # fn main() -> Result<(), contact_form::testing::QueryError> {
//! let mut screen = Screen::render_default();
//!
//! let first = screen.get_by_placeholder_text(TextMatch::insensitive("edd"))?.target()?;
//! screen.type_text(first, "boo")?;
//! assert!(screen
//!     .query_by_text("Error: firstName must have at least 5 characters.")?
//!     .is_some());
//!
//! let submit = screen.get_by_role(Role::Button)?.target()?;
//! screen.click(submit)?;
//! assert_eq!(screen.find_all_by_test_id("error")?.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use contact_form::{Validation, assert_success, assert_failure};
//!
//! let success = Validation::<_, Vec<String>>::success(42);
//! assert_success!(success);
//!
//! let failure = Validation::<i32, _>::failure(vec!["error".to_string()]);
//! assert_failure!(failure);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::field::FieldId;
use crate::form::ContactForm;
use crate::view::{Binding, Node, Role};

/// How to match a piece of visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// The whole text must equal this string.
    Exact(String),
    /// The text must contain this string, ignoring case.
    Insensitive(String),
}

impl TextMatch {
    /// Match the whole text exactly.
    pub fn exact(text: impl Into<String>) -> Self {
        TextMatch::Exact(text.into())
    }

    /// Match a case-insensitive substring.
    pub fn insensitive(text: impl Into<String>) -> Self {
        TextMatch::Insensitive(text.into().to_lowercase())
    }

    /// Whether `text` satisfies this matcher.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => text == expected,
            TextMatch::Insensitive(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        TextMatch::exact(text)
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        TextMatch::Exact(text)
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(text) => write!(f, "{text:?}"),
            TextMatch::Insensitive(text) => write!(f, "/{text}/i"),
        }
    }
}

/// Error returned by [`Screen`] queries and interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No element matched.
    NotFound {
        /// Description of the query.
        query: String,
    },
    /// A single-element query matched several elements.
    MultipleFound {
        /// Description of the query.
        query: String,
        /// How many matched.
        count: usize,
    },
    /// The element is not wired to a field or button.
    NotInteractive {
        /// Tag of the element.
        tag: String,
    },
    /// Text was typed into something that is not a field.
    NotEditable,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NotFound { query } => write!(f, "unable to find an element by {query}"),
            QueryError::MultipleFound { query, count } => {
                write!(f, "found {count} elements by {query}, expected one")
            }
            QueryError::NotInteractive { tag } => write!(f, "<{tag}> is not interactive"),
            QueryError::NotEditable => f.write_str("cannot type into the submit button"),
        }
    }
}

impl std::error::Error for QueryError {}

impl Node {
    /// The binding of an interactive element, for use with
    /// [`Screen::type_text`] and [`Screen::click`].
    ///
    /// # Errors
    ///
    /// [`QueryError::NotInteractive`] for plain elements.
    pub fn target(&self) -> Result<Binding, QueryError> {
        self.binding().ok_or_else(|| QueryError::NotInteractive {
            tag: self.tag().to_string(),
        })
    }
}

fn exactly_one<'a>(query: String, mut found: Vec<&'a Node>) -> Result<&'a Node, QueryError> {
    match found.len() {
        0 => Err(QueryError::NotFound { query }),
        1 => Ok(found.remove(0)),
        count => Err(QueryError::MultipleFound { query, count }),
    }
}

/// A rendered form plus the queries and events a user can perform on it.
#[derive(Debug)]
pub struct Screen {
    form: ContactForm,
    tree: Node,
    latest: Rc<RefCell<Option<Node>>>,
}

impl Screen {
    /// Mount `form` and render it.
    pub fn render(mut form: ContactForm) -> Self {
        let latest = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&latest);
        form.on_render(move |tree| {
            *sink.borrow_mut() = Some(tree.clone());
        });
        let tree = form.render();
        Self { form, tree, latest }
    }

    /// Mount a fresh contact form.
    pub fn render_default() -> Self {
        Self::render(ContactForm::new())
    }

    /// The mounted form.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// The current rendered tree.
    pub fn root(&self) -> &Node {
        &self.tree
    }

    fn refresh(&mut self) {
        if let Some(tree) = self.latest.borrow_mut().take() {
            self.tree = tree;
        }
    }

    fn all_where(&self, pred: impl Fn(&Node) -> bool) -> Vec<&Node> {
        self.tree.descendants().filter(|n| pred(*n)).collect()
    }

    /// Every element whose own text matches.
    pub fn query_all_by_text(&self, text: impl Into<TextMatch>) -> Vec<&Node> {
        let text = text.into();
        self.all_where(|n| n.text().is_some_and(|t| text.matches(t)))
    }

    /// The element whose own text matches, if there is one.
    ///
    /// # Errors
    ///
    /// [`QueryError::MultipleFound`] if more than one element matches.
    pub fn query_by_text(&self, text: impl Into<TextMatch>) -> Result<Option<&Node>, QueryError> {
        let text = text.into();
        match self.get_by_text(text) {
            Ok(node) => Ok(Some(node)),
            Err(QueryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// The single element whose own text matches.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] or [`QueryError::MultipleFound`].
    pub fn get_by_text(&self, text: impl Into<TextMatch>) -> Result<&Node, QueryError> {
        let text = text.into();
        exactly_one(format!("text {text}"), self.query_all_by_text(text.clone()))
    }

    /// The input associated with the label whose text matches.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] or [`QueryError::MultipleFound`].
    pub fn get_by_label_text(&self, text: impl Into<TextMatch>) -> Result<&Node, QueryError> {
        let text = text.into();
        let query = format!("label text {text}");
        let targets: Vec<&str> = self
            .all_where(|n| n.tag() == "label" && n.text().is_some_and(|t| text.matches(t)))
            .into_iter()
            .filter_map(Node::label_for)
            .collect();
        let inputs = self.all_where(|n| n.id().is_some_and(|id| targets.contains(&id)));
        exactly_one(query, inputs)
    }

    /// The single element whose placeholder matches.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] or [`QueryError::MultipleFound`].
    pub fn get_by_placeholder_text(&self, text: impl Into<TextMatch>) -> Result<&Node, QueryError> {
        let text = text.into();
        let found = self.all_where(|n| n.placeholder().is_some_and(|p| text.matches(p)));
        exactly_one(format!("placeholder text {text}"), found)
    }

    /// The single element with `role`.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] or [`QueryError::MultipleFound`].
    pub fn get_by_role(&self, role: Role) -> Result<&Node, QueryError> {
        exactly_one(format!("role {role:?}"), self.all_where(|n| n.role() == Some(role)))
    }

    /// Every element carrying `test_id`.
    pub fn query_all_by_test_id(&self, test_id: &str) -> Vec<&Node> {
        self.all_where(|n| n.test_id() == Some(test_id))
    }

    /// Every element carrying `test_id`, requiring at least one.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] when nothing carries the id.
    pub fn find_all_by_test_id(&self, test_id: &str) -> Result<Vec<&Node>, QueryError> {
        let found = self.query_all_by_test_id(test_id);
        if found.is_empty() {
            return Err(QueryError::NotFound {
                query: format!("test id {test_id:?}"),
            });
        }
        Ok(found)
    }

    /// Type `text` into the field behind `target`, one keystroke at a time.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotEditable`] when `target` is the submit button.
    pub fn type_text(&mut self, target: Binding, text: &str) -> Result<(), QueryError> {
        let Binding::Field(field) = target else {
            return Err(QueryError::NotEditable);
        };
        self.form.type_text(field, text);
        self.refresh();
        Ok(())
    }

    /// Click the element behind `target`. Clicking the submit button submits
    /// the form; clicking an input does nothing.
    ///
    /// # Errors
    ///
    /// Currently always returns `Ok`.
    pub fn click(&mut self, target: Binding) -> Result<(), QueryError> {
        if target == Binding::Submit {
            self.form.submit();
            self.refresh();
        }
        Ok(())
    }

    /// Shortcut for typing into `field` without a query.
    pub fn type_into(&mut self, field: FieldId, text: &str) {
        self.form.type_text(field, text);
        self.refresh();
    }
}

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with specific errors.
///
/// # Example
///
/// ```rust
/// use contact_form::{Validation, assert_validation_errors};
///
/// let val = Validation::<i32, _>::failure(vec!["error1", "error2"]);
/// assert_validation_errors!(val, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for FieldId {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::sample::select(FieldId::ALL.to_vec()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validation;

    #[test]
    fn test_text_match_exact_and_insensitive() {
        assert!(TextMatch::exact("Kennedy").matches("Kennedy"));
        assert!(!TextMatch::exact("Kennedy").matches("Kennedy Bryant"));
        assert!(TextMatch::insensitive("CONTACT form").matches("Contact Form"));
        assert_eq!(TextMatch::insensitive("Edd").to_string(), "/edd/i");
    }

    #[test]
    fn test_get_by_role_finds_single_button() {
        let screen = Screen::render_default();
        let button = screen.get_by_role(Role::Button).unwrap();
        assert_eq!(button.text(), Some("Submit"));
        assert_eq!(button.target(), Ok(Binding::Submit));
    }

    #[test]
    fn test_get_by_role_reports_multiple() {
        let screen = Screen::render_default();
        let err = screen.get_by_role(Role::TextBox).unwrap_err();
        assert_eq!(
            err,
            QueryError::MultipleFound {
                query: "role TextBox".to_string(),
                count: 4
            }
        );
    }

    #[test]
    fn test_get_by_label_text_resolves_association() {
        let screen = Screen::render_default();
        let input = screen
            .get_by_label_text(TextMatch::insensitive("last name"))
            .unwrap();
        assert_eq!(input.id(), Some("lastName"));
        assert_eq!(input.target(), Ok(Binding::Field(FieldId::LastName)));
    }

    #[test]
    fn test_missing_text_is_none_not_error() {
        let screen = Screen::render_default();
        assert_eq!(screen.query_by_text("Kennedy"), Ok(None));
        assert!(matches!(
            screen.get_by_text("Kennedy"),
            Err(QueryError::NotFound { .. })
        ));
        assert!(screen.find_all_by_test_id("error").is_err());
    }

    #[test]
    fn test_plain_elements_are_not_targets() {
        let screen = Screen::render_default();
        let header = screen.get_by_text("Contact Form").unwrap();
        assert_eq!(
            header.target(),
            Err(QueryError::NotInteractive {
                tag: "h1".to_string()
            })
        );
    }

    #[test]
    fn test_typing_into_button_fails() {
        let mut screen = Screen::render_default();
        assert_eq!(
            screen.type_text(Binding::Submit, "x"),
            Err(QueryError::NotEditable)
        );
    }

    #[test]
    fn test_screen_tree_follows_form_state() {
        let mut screen = Screen::render_default();
        screen.type_into(FieldId::FirstName, "Kennedy");
        let input = screen.get_by_placeholder_text("Edd").unwrap();
        assert_eq!(input.value(), Some("Kennedy"));
        assert_eq!(screen.form().values().first_name, "Kennedy");
    }

    #[test]
    fn test_query_error_display() {
        let err = QueryError::NotFound {
            query: "text \"x\"".to_string(),
        };
        assert_eq!(err.to_string(), "unable to find an element by text \"x\"");
    }

    #[test]
    fn test_assert_validation_errors_macro() {
        let val = Validation::<i32, _>::failure(vec!["error1", "error2"]);
        assert_validation_errors!(val, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn test_assert_success_panics_on_failure() {
        let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn test_assert_failure_panics_on_success() {
        let val = Validation::<_, Vec<String>>::success(42);
        assert_failure!(val);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_arbitrary_field_round_trips_through_name(field in any::<FieldId>()) {
                prop_assert!(FieldId::ALL.iter().any(|f| f.name() == field.name()));
            }
        }
    }
}
