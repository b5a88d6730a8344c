//! Footer newsletter subscription

use std::sync::Arc;
use std::time::Duration;

use crate::dom::{Document, InputElement};
use crate::forms::is_valid_email;
use crate::notify::Notifier;

/// Id of the footer email input
pub const NEWSLETTER_INPUT_ID: &str = "footer-email";

/// Selector of the footer subscribe button
pub const SUBSCRIBE_BUTTON_SELECTOR: &str = ".subscribe-btn";

/// Toast shown when the address is rejected
pub const INVALID_EMAIL_TOAST: &str = "Моля въведете валиден e-mail!";

/// Result of a subscription attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    /// The trimmed address was accepted
    Subscribed(String),
    /// The address was empty or malformed
    Rejected,
}

impl SubscriptionOutcome {
    /// Whether the input should be emptied
    #[must_use]
    pub const fn clears_input(&self) -> bool {
        matches!(self, Self::Subscribed(_))
    }
}

/// Handles the footer subscribe button
#[derive(Clone)]
pub struct NewsletterSignup {
    notifier: Arc<dyn Notifier>,
    toast_duration: Duration,
}

impl std::fmt::Debug for NewsletterSignup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterSignup")
            .field("toast_duration", &self.toast_duration)
            .finish_non_exhaustive()
    }
}

impl NewsletterSignup {
    /// Create a signup handler reporting through `notifier`
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>, toast_duration: Duration) -> Self {
        Self {
            notifier,
            toast_duration,
        }
    }

    /// Validate an address and toast the result
    pub fn submit(&self, raw: &str) -> SubscriptionOutcome {
        let email = raw.trim();
        if is_valid_email(email) {
            tracing::info!(email, "newsletter subscription");
            self.notifier.show(
                &format!("Благодарим Ви! Вие се абонирахте с имейл: {email}"),
                self.toast_duration,
            );
            SubscriptionOutcome::Subscribed(email.to_string())
        } else {
            tracing::debug!("newsletter address rejected");
            self.notifier.show(INVALID_EMAIL_TOAST, self.toast_duration);
            SubscriptionOutcome::Rejected
        }
    }

    /// Read the address from an input, emptying it on success
    pub fn submit_from<I: InputElement>(&self, input: &I) -> SubscriptionOutcome {
        let outcome = self.submit(&input.value());
        if outcome.clears_input() {
            input.set_value("");
        }
        outcome
    }

    /// Subscribe with the footer e-mail input whenever the button is clicked
    ///
    /// Returns `false`, and logs an error, when the footer lacks the button
    /// or the input.
    pub fn install<D: Document>(self, document: &D) -> bool {
        let wired = document.input(NEWSLETTER_INPUT_ID).is_some_and(|input| {
            document.on_click(
                SUBSCRIBE_BUTTON_SELECTOR,
                Box::new(move || {
                    self.submit_from(&input);
                }),
            )
        });
        if !wired {
            tracing::error!("Subscribe button or email input not found.");
        }
        wired
    }
}
