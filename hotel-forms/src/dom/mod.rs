//! Page seam
//!
//! The validator never talks to a browser directly. It goes through these
//! traits, which a host (a browser binding, a test harness, the CLI) implements.
//! [`memory`] provides an in-process implementation.

pub mod memory;

pub use memory::{MemoryDocument, MemoryErrorSlot, MemoryForm, MemoryInput, MemoryVideo};

/// A submit event as seen by listeners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// Create a fresh event
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Stop the browser from navigating or posting the form
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a listener called [`Self::prevent_default`]
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Callback run synchronously when a form is submitted
///
/// Receives the form being submitted, so listeners need not hold a handle
/// to it.
pub type SubmitListener<F> = Box<dyn FnMut(&F, &mut SubmitEvent) + Send>;

/// Callback run when an element is clicked
pub type ClickListener = Box<dyn FnMut() + Send>;

/// Callback run when a video element finishes its clip
pub type EndedListener<V> = Box<dyn FnMut(&V) + Send>;

/// An input, textarea, select or checkbox
pub trait InputElement {
    /// Current value, untrimmed
    fn value(&self) -> String;

    /// Replace the current value
    fn set_value(&self, value: &str);

    /// Checked state; `false` for non-checkbox inputs
    fn is_checked(&self) -> bool;

    /// Set an attribute such as `min` or `max`
    fn set_attribute(&self, name: &str, value: &str);
}

/// The element that displays a field's error message
pub trait ErrorElement {
    /// Set the text and make the element visible
    fn show(&self, message: &str);

    /// Empty the text and hide the element
    fn clear(&self);
}

/// A form on the page
pub trait FormElement {
    /// Input handle type
    type Input: InputElement + Send + 'static;
    /// Error display handle type
    type Error: ErrorElement + Send + 'static;

    /// Find an input inside the form
    fn input(&self, id: &str) -> Option<Self::Input>;

    /// Find the error display belonging to a field
    fn error_element(&self, field_id: &str) -> Option<Self::Error>;

    /// Restore every input to its default state
    fn reset(&self);

    /// Register a submit listener
    fn on_submit(&self, listener: SubmitListener<Self>)
    where
        Self: Sized;
}

/// A `<video>` element
pub trait VideoSurface {
    /// Stop the current clip
    fn pause(&self);

    /// Point the element at a new clip
    fn set_source(&self, src: &str);

    /// Start fetching the current source
    fn load(&self);

    /// Start playback once enough data is buffered
    fn play_when_ready(&self);

    /// Register a listener for the end of each clip
    fn on_ended(&self, listener: EndedListener<Self>)
    where
        Self: Sized;
}

/// The page
pub trait Document {
    /// Form handle type
    type Form: FormElement + Clone + Send + 'static;
    /// Video handle type
    type Video: VideoSurface + Clone + Send + 'static;

    /// Find a form by element id
    fn form(&self, id: &str) -> Option<Self::Form>;

    /// Find a standalone input (outside any form) by element id
    fn input(&self, id: &str) -> Option<<Self::Form as FormElement>::Input>;

    /// Replace the inner HTML of a placeholder element
    ///
    /// Returns `false` if no such element exists.
    fn set_inner_html(&self, id: &str, html: &str) -> bool;

    /// Find a video element by id
    fn video(&self, id: &str) -> Option<Self::Video>;

    /// Register a click listener on the first element matching `selector`
    ///
    /// Returns `false` if nothing matches.
    fn on_click(&self, selector: &str, listener: ClickListener) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_event_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
