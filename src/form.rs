//! The contact form component.
//!
//! [`ContactForm`] owns the field values, the current error map and the
//! submission state. Every mutation follows the same sequence: update the
//! value, recompute the affected errors, then notify render listeners with a
//! fresh view.
//!
//! ```
//! use contact_form::{ContactForm, FieldId, SubmitOutcome};
//!
//! let mut form = ContactForm::new();
//! form.type_text(FieldId::FirstName, "Kennedy");
//! form.type_text(FieldId::LastName, "Bryant");
//! form.type_text(FieldId::Email, "test@email.com");
//!
//! assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
//! assert_eq!(form.submitted().map(|v| v.first_name.as_str()), Some("Kennedy"));
//! ```

use std::fmt;

use crate::error::ErrorMap;
use crate::field::{FieldId, FieldValues};
use crate::schema::ValidationSchema;
use crate::view::{self, Node};
use crate::Validation;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// No submission has been accepted yet.
    #[default]
    Editing,
    /// Holds a copy of the values from the last accepted submission.
    Submitted(FieldValues),
}

/// Input events understood by [`ContactForm::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed to `value`.
    InputChanged {
        /// The edited field.
        field: FieldId,
        /// Its complete new value.
        value: String,
    },
    /// The submit button was activated.
    SubmitRequested,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    /// All gating fields passed; the snapshot was replaced with these values.
    Accepted(&'a FieldValues),
    /// At least one gating field failed; nothing was submitted.
    Rejected(&'a ErrorMap),
}

impl SubmitOutcome<'_> {
    /// True for [`SubmitOutcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

type RenderListener = Box<dyn FnMut(&Node)>;

/// A contact form instance.
pub struct ContactForm {
    schema: ValidationSchema,
    values: FieldValues,
    errors: ErrorMap,
    phase: FormPhase,
    listeners: Vec<RenderListener>,
}

impl fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("phase", &self.phase)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// A blank form using the contact schema.
    pub fn new() -> Self {
        Self::with_schema(ValidationSchema::contact())
    }

    /// A blank form using a custom schema.
    pub fn with_schema(schema: ValidationSchema) -> Self {
        Self {
            schema,
            values: FieldValues::default(),
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
            listeners: Vec::new(),
        }
    }

    /// Current field values.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Current errors.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Rules in effect.
    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// Whether a submission has been accepted.
    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted(_))
    }

    /// Values of the last accepted submission.
    pub fn submitted(&self) -> Option<&FieldValues> {
        match &self.phase {
            FormPhase::Editing => None,
            FormPhase::Submitted(snapshot) => Some(snapshot),
        }
    }

    /// Register a listener called with the new view after every mutation.
    pub fn on_render<F>(&mut self, listener: F)
    where
        F: FnMut(&Node) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Render the current state.
    pub fn render(&self) -> Node {
        view::render(self)
    }

    /// Handle one input event.
    pub fn dispatch(&mut self, event: FormEvent) {
        match event {
            FormEvent::InputChanged { field, value } => self.change(field, value),
            FormEvent::SubmitRequested => {
                self.submit();
            }
        }
    }

    /// Replace the value of `field` and re-validate that field only.
    pub fn change(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value);
        self.revalidate(field);
        self.notify();
    }

    /// Type `text` into `field` one character at a time.
    ///
    /// Each character is a separate change, so the error for `field` is
    /// recomputed after every keystroke.
    pub fn type_text(&mut self, field: FieldId, text: &str) {
        for c in text.chars() {
            self.values.push_char(field, c);
            self.revalidate(field);
            self.notify();
        }
    }

    /// Validate every field and, if nothing blocks, snapshot the values.
    ///
    /// A rejected attempt leaves any earlier snapshot in place.
    pub fn submit(&mut self) -> SubmitOutcome<'_> {
        let errors = match self.schema.validate(&self.values) {
            Validation::Success(_) => ErrorMap::new(),
            Validation::Failure(errors) => errors,
        };
        let blocked = errors
            .iter()
            .any(|error| self.schema.gates_submission(error.field));
        self.errors = errors;

        if blocked {
            #[cfg(feature = "tracing")]
            tracing::info!(
                errors = self.errors.len(),
                fields = ?self.errors.iter().map(|e| e.field.name()).collect::<Vec<_>>(),
                "submission rejected"
            );
        } else {
            #[cfg(feature = "tracing")]
            tracing::info!(
                resubmission = self.is_submitted(),
                has_message = !self.values.message.is_empty(),
                "submission accepted"
            );
            self.phase = FormPhase::Submitted(self.values.clone());
        }

        self.notify();

        match &self.phase {
            FormPhase::Submitted(snapshot) if !blocked => SubmitOutcome::Accepted(snapshot),
            _ => SubmitOutcome::Rejected(&self.errors),
        }
    }

    fn revalidate(&mut self, field: FieldId) {
        let error = self.schema.error_for(field, self.values.get(field));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = field.name(),
            len = self.values.get(field).chars().count(),
            error = ?error.map(|e| e.rule),
            "field changed"
        );

        self.errors.update(field, error);
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let tree = self.render();
        for listener in &mut self.listeners {
            listener(&tree);
        }
    }
}
