//! Testing utilities for hotel-forms hosts
//!
//! - [`page_for`] builds an in-memory page matching a form table
//! - assertion helpers for error displays and toasts
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use hotel_forms::forms::presets;
//! use hotel_forms::notify::ToastBoard;
//! use hotel_forms::site::bootstrap;
//! use hotel_forms::testing::{assert_field_error, page_for};
//!
//! let (document, form) = page_for(&presets::contact_form());
//! bootstrap(&document, &Default::default(), Arc::new(ToastBoard::new()));
//!
//! form.submit();
//! assert_field_error(&form, "email", "Моля въведете вашия e-mail.");
//! ```

pub mod assertions;

pub use assertions::*;

use crate::dom::{MemoryDocument, MemoryForm, MemoryInput};
use crate::forms::{FieldType, FormSchema};

/// A form with one input and one error display per descriptor
#[must_use]
pub fn form_for(schema: &FormSchema) -> MemoryForm {
    schema
        .fields()
        .iter()
        .fold(MemoryForm::new(schema.id()), |form, descriptor| {
            let input = match descriptor.field_type {
                FieldType::Checkbox => MemoryInput::checkbox(&descriptor.id),
                FieldType::Text | FieldType::Email => MemoryInput::text(&descriptor.id),
            };
            form.with_field(input)
        })
}

/// A page holding only [`form_for`]`(schema)`, plus a handle to that form
#[must_use]
pub fn page_for(schema: &FormSchema) -> (MemoryDocument, MemoryForm) {
    let form = form_for(schema);
    (MemoryDocument::new().with_form(form.clone()), form)
}
