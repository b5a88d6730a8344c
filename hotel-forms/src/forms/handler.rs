//! Binding a schema to a form on the page
//!
//! [`FormValidator`] resolves every field's input and error display once, at
//! bind time, and then re-validates the whole form on each submit.

use std::sync::Arc;
use std::time::Duration;

use crate::dom::{Document, ErrorElement, FormElement, InputElement, SubmitEvent};
use crate::notify::Notifier;

use super::error::ValidationOutcome;
use super::field::{FieldType, FieldValue};
use super::rules::{evaluate_rules, Rule};
use super::schema::FormSchema;

/// A field whose input and error display were both found
struct BoundField<I, E> {
    id: String,
    field_type: FieldType,
    rules: Vec<Rule>,
    input: I,
    error: E,
}

impl<I: InputElement, E> BoundField<I, E> {
    fn current_value(&self) -> FieldValue {
        match self.field_type {
            FieldType::Checkbox => FieldValue::Checked(self.input.is_checked()),
            FieldType::Text | FieldType::Email => FieldValue::text(self.input.value()),
        }
    }
}

/// Validates one form on every submit attempt
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use hotel_forms::dom::{MemoryDocument, MemoryForm, MemoryInput};
/// use hotel_forms::forms::{presets, FormValidator};
/// use hotel_forms::notify::{ToastBoard, DEFAULT_TOAST_DURATION};
///
/// let form = MemoryForm::new("contact-form")
///     .with_field(MemoryInput::text("name"))
///     .with_field(MemoryInput::text("email"))
///     .with_field(MemoryInput::text("message"))
///     .with_field(MemoryInput::checkbox("privacy"));
/// let document = MemoryDocument::new().with_form(form.clone());
/// let toasts = Arc::new(ToastBoard::new());
///
/// let installed = FormValidator::install(
///     &document,
///     &presets::contact_form(),
///     toasts.clone(),
///     DEFAULT_TOAST_DURATION,
/// );
/// assert!(installed);
///
/// form.submit();
/// assert_eq!(form.visible_errors().len(), 4);
/// assert!(toasts.visible().is_empty());
/// ```
pub struct FormValidator<F: FormElement> {
    form: F,
    checks: FormChecks<F::Input, F::Error>,
}

/// Everything a submit needs except the form itself
struct FormChecks<I, E> {
    form_id: String,
    fields: Vec<BoundField<I, E>>,
    success_message: String,
    notifier: Arc<dyn Notifier>,
    toast_duration: Duration,
}

impl<I: InputElement, E: ErrorElement> FormChecks<I, E> {
    fn run(&self, event: &mut SubmitEvent, reset: impl FnOnce()) -> ValidationOutcome {
        event.prevent_default();

        for field in &self.fields {
            field.error.clear();
        }

        let mut outcome = ValidationOutcome::new();
        for field in &self.fields {
            let error = evaluate_rules(&field.rules, &field.current_value());
            if let Some(error) = &error {
                field.error.show(error.message());
            }
            outcome.record(field.id.clone(), error);
        }

        if outcome.has_errors() {
            tracing::debug!(
                form = %self.form_id,
                errors = outcome.error_count(),
                "submission blocked"
            );
        } else {
            tracing::info!(form = %self.form_id, "submission accepted");
            self.notifier.show(&self.success_message, self.toast_duration);
            reset();
        }

        outcome
    }
}

impl<F: FormElement> std::fmt::Debug for FormValidator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("form_id", &self.checks.form_id)
            .field(
                "fields",
                &self.checks.fields.iter().map(|field| &field.id).collect::<Vec<_>>(),
            )
            .field("toast_duration", &self.checks.toast_duration)
            .finish_non_exhaustive()
    }
}

impl<F: FormElement> FormValidator<F> {
    /// Pair the schema's fields with the form's elements
    ///
    /// Returns `None` when the form is not on this page. Fields missing either
    /// their input or their error display are left out and never validated.
    pub fn bind<D>(
        document: &D,
        schema: &FormSchema,
        notifier: Arc<dyn Notifier>,
        toast_duration: Duration,
    ) -> Option<Self>
    where
        D: Document<Form = F>,
    {
        let Some(form) = document.form(schema.id()) else {
            tracing::debug!(form = schema.id(), "form not on this page");
            return None;
        };

        let mut fields = Vec::with_capacity(schema.fields().len());
        for descriptor in schema.fields() {
            match (form.input(&descriptor.id), form.error_element(&descriptor.id)) {
                (Some(input), Some(error)) => fields.push(BoundField {
                    id: descriptor.id.clone(),
                    field_type: descriptor.field_type,
                    rules: descriptor.rules(),
                    input,
                    error,
                }),
                (input, error) => tracing::debug!(
                    form = schema.id(),
                    field = %descriptor.id,
                    has_input = input.is_some(),
                    has_error_element = error.is_some(),
                    "field elements missing, skipping"
                ),
            }
        }

        Some(Self {
            form,
            checks: FormChecks {
                form_id: schema.id().to_string(),
                fields,
                success_message: schema.success_message().to_string(),
                notifier,
                toast_duration,
            },
        })
    }

    /// Form element id
    #[must_use]
    pub fn form_id(&self) -> &str {
        &self.checks.form_id
    }

    /// Ids of the fields that will be validated
    pub fn bound_fields(&self) -> impl Iterator<Item = &str> {
        self.checks.fields.iter().map(|field| field.id.as_str())
    }

    /// Validate the form in response to a submit event
    ///
    /// Always prevents the default submission. Clears every previous error,
    /// checks every bound field, shows all failures at once, and on success
    /// shows the confirmation toast and resets the form.
    pub fn handle_submit(&self, event: &mut SubmitEvent) -> ValidationOutcome {
        self.checks.run(event, || self.form.reset())
    }
}

impl<F> FormValidator<F>
where
    F: FormElement + Clone + Send + 'static,
{
    /// Bind and register the validator on the form's submit event
    ///
    /// Returns `false` and does nothing when the form is not on this page.
    /// The registered listener resets the form it is dispatched from and
    /// keeps no handle of its own to it.
    pub fn install<D>(
        document: &D,
        schema: &FormSchema,
        notifier: Arc<dyn Notifier>,
        toast_duration: Duration,
    ) -> bool
    where
        D: Document<Form = F>,
    {
        let Some(Self { form, checks }) = Self::bind(document, schema, notifier, toast_duration)
        else {
            return false;
        };
        form.on_submit(Box::new(move |form: &F, event: &mut SubmitEvent| {
            checks.run(event, || form.reset());
        }));
        true
    }
}
