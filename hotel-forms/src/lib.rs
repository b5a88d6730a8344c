//! hotel-forms: declarative form validation for the hotel website
//!
//! Forms are described as tables of field descriptors. A [`FormValidator`]
//! binds a table to a form on the page, blocks every submission, shows one
//! message per invalid field and, when everything passes, toasts a
//! confirmation and resets the form.
//!
//! The page itself is reached through the traits in [`dom`], so the same
//! validators run against a browser binding or the in-memory page used in
//! tests and the CLI.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use hotel_forms::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = SiteConfig::default();
//! let form = MemoryForm::new("contact-form")
//!     .with_field(MemoryInput::text("name"))
//!     .with_field(MemoryInput::text("email"))
//!     .with_field(MemoryInput::text("message"))
//!     .with_field(MemoryInput::checkbox("privacy"));
//! let document = MemoryDocument::new().with_form(form.clone());
//! let toasts = Arc::new(ToastBoard::new());
//!
//! let report = bootstrap(&document, &config, toasts.clone());
//! assert_eq!(report.installed_forms, vec!["contact-form"]);
//!
//! form.fill("name", "Ivan Petrov")
//!     .fill("email", "ivan@example.com")
//!     .fill("message", "Здравейте")
//!     .check("privacy", true);
//! form.submit();
//!
//! assert_eq!(toasts.visible(), vec!["Вашето съобщение е изпратено успешно!"]);
//! # Ok(())
//! # }
//! ```
//!
//! [`FormValidator`]: forms::FormValidator

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dom;
pub mod error;
pub mod forms;
pub mod notify;
pub mod observability;
pub mod site;
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use hotel_forms::prelude::*;
    //! ```

    // Form engine
    pub use crate::forms::{
        presets, FieldDescriptor, FieldError, FieldType, FieldValue, FieldValues, FormSchema,
        FormValidator, Rule, ValidationOutcome,
    };

    // Page seam
    pub use crate::dom::{
        Document, ErrorElement, FormElement, InputElement, MemoryDocument, MemoryForm,
        MemoryInput, MemoryVideo, SubmitEvent, VideoSurface,
    };

    // Notifications
    pub use crate::notify::{Notifier, ToastBoard, TracingNotifier, DEFAULT_TOAST_DURATION};

    // Page glue
    pub use crate::site::{
        bootstrap, load_partials, ArrivalWindow, BootstrapReport, FsFragmentSource,
        NewsletterSignup, VideoRotation,
    };

    // Configuration and errors
    pub use crate::config::SiteConfig;
    pub use crate::error::HotelFormsError;

    // Re-export key dependencies
    pub use validator;
}
