//! Headless view tree for the contact form.
//!
//! [`render`] turns the current form state into a tree of [`Node`]s. The tree
//! is plain data: it can be printed, walked, or queried through
//! [`testing::Screen`](crate::testing::Screen) the way a user would look at
//! the page, by label, placeholder, role or visible text.

use std::fmt;

use crate::field::{FieldId, InputKind};
use crate::form::ContactForm;

/// Test id carried by every inline error element.
pub const ERROR_TEST_ID: &str = "error";

/// Test id of the submitted summary section.
pub const SUMMARY_TEST_ID: &str = "summary";

/// Accessibility role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The whole form.
    Form,
    /// Section or page heading.
    Heading,
    /// Editable text.
    TextBox,
    /// Clickable button.
    Button,
    /// Inline validation message.
    Alert,
    /// Read-only section.
    Region,
}

/// What an interactive node is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Controlled input of a field.
    Field(FieldId),
    /// The submit button.
    Submit,
}

/// One element of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: &'static str,
    role: Option<Role>,
    id: Option<String>,
    label_for: Option<String>,
    placeholder: Option<String>,
    test_id: Option<String>,
    value: Option<String>,
    text: Option<String>,
    binding: Option<Binding>,
    children: Vec<Node>,
}

impl Node {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            role: None,
            id: None,
            label_for: None,
            placeholder: None,
            test_id: None,
            value: None,
            text: None,
            binding: None,
            children: Vec::new(),
        }
    }

    fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn with_label_for(mut self, id: impl Into<String>) -> Self {
        self.label_for = Some(id.into());
        self
    }

    fn with_placeholder(mut self, placeholder: Option<&str>) -> Self {
        self.placeholder = placeholder.map(str::to_string);
        self
    }

    fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    fn with_binding(mut self, binding: Binding) -> Self {
        self.binding = Some(binding);
        self
    }

    fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Element name, e.g. `input`.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Role, if the element has one.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Element id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Id of the element a label points at.
    pub fn label_for(&self) -> Option<&str> {
        self.label_for.as_deref()
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Test id.
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    /// Current value of an input.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Text directly owned by this node, not including children.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// What the node is wired to, if it is interactive.
    pub fn binding(&self) -> Option<Binding> {
        self.binding
    }

    /// Direct children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// This node and all of its descendants, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order walk over a subtree. Created by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:indent$}<{}", "", node.tag, indent = depth * 2)?;
            let attrs = [
                ("id", &node.id),
                ("for", &node.label_for),
                ("placeholder", &node.placeholder),
                ("data-testid", &node.test_id),
                ("value", &node.value),
            ];
            for (name, value) in attrs {
                if let Some(value) = value {
                    write!(f, " {name}={value:?}")?;
                }
            }
            f.write_str(">")?;
            if let Some(text) = &node.text {
                f.write_str(text)?;
            }
            if node.children.is_empty() {
                return writeln!(f, "</{}>", node.tag);
            }
            writeln!(f)?;
            for child in &node.children {
                write_node(child, depth + 1, f)?;
            }
            writeln!(f, "{:indent$}</{}>", "", node.tag, indent = depth * 2)
        }
        write_node(self, 0, f)
    }
}

fn field_row(form: &ContactForm, field: FieldId) -> Node {
    let id = field.name();
    let value = form.values().get(field);

    let input = match field.input_kind() {
        InputKind::Text => Node::new("input"),
        InputKind::MultiLine => Node::new("textarea").with_text(value),
    }
    .with_role(Role::TextBox)
    .with_id(id)
    .with_placeholder(field.placeholder())
    .with_value(value)
    .with_binding(Binding::Field(field));

    let error = form.errors().get(field).map(|error| {
        Node::new("p")
            .with_role(Role::Alert)
            .with_test_id(ERROR_TEST_ID)
            .with_text(error.message())
    });

    Node::new("div")
        .with_child(Node::new("label").with_label_for(id).with_text(field.label()))
        .with_child(input)
        .with_children(error)
}

fn summary_row(field: FieldId, value: &str) -> Node {
    Node::new("div")
        .with_test_id(format!("display-{}", field.name()))
        .with_child(Node::new("span").with_text(field.caption()))
        .with_child(Node::new("span").with_text(value))
}

fn summary(form: &ContactForm) -> Option<Node> {
    let submitted = form.submitted()?;
    let rows = submitted
        .iter()
        .filter(|&(field, value)| field != FieldId::Message || !value.is_empty())
        .map(|(field, value)| summary_row(field, value));

    Some(
        Node::new("section")
            .with_role(Role::Region)
            .with_test_id(SUMMARY_TEST_ID)
            .with_child(Node::new("h2").with_role(Role::Heading).with_text("You Submitted:"))
            .with_children(rows),
    )
}

/// Render the current state of `form`.
///
/// The editable form is always present. The summary of the last accepted
/// submission follows it once the form has been submitted.
pub fn render(form: &ContactForm) -> Node {
    let fields = FieldId::ALL.into_iter().map(|field| field_row(form, field));

    Node::new("form")
        .with_role(Role::Form)
        .with_child(Node::new("h1").with_role(Role::Heading).with_text("Contact Form"))
        .with_children(fields)
        .with_child(
            Node::new("button")
                .with_role(Role::Button)
                .with_text("Submit")
                .with_binding(Binding::Submit),
        )
        .with_children(summary(form))
}
