//! In-memory page model
//!
//! Handles are cheap to clone and share their state, like element references
//! in a browser. Error displays follow the `{field}-error` id convention.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::{
    ClickListener, Document, EndedListener, ErrorElement, FormElement, InputElement, SubmitEvent,
    SubmitListener, VideoSurface,
};

/// Id of the error display paired with a field
#[must_use]
pub fn error_element_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Text,
    Checkbox,
}

#[derive(Debug)]
struct InputState {
    kind: InputKind,
    value: String,
    default_value: String,
    checked: bool,
    default_checked: bool,
    attributes: HashMap<String, String>,
}

/// An input element
#[derive(Debug, Clone)]
pub struct MemoryInput {
    id: Arc<str>,
    state: Arc<RwLock<InputState>>,
}

impl MemoryInput {
    /// Create an empty text input
    #[must_use]
    pub fn text(id: &str) -> Self {
        Self::new(id, InputKind::Text)
    }

    /// Create an unchecked checkbox
    #[must_use]
    pub fn checkbox(id: &str) -> Self {
        Self::new(id, InputKind::Checkbox)
    }

    fn new(id: &str, kind: InputKind) -> Self {
        Self {
            id: Arc::from(id),
            state: Arc::new(RwLock::new(InputState {
                kind,
                value: String::new(),
                default_value: String::new(),
                checked: false,
                default_checked: false,
                attributes: HashMap::new(),
            })),
        }
    }

    /// Set the value restored by a form reset (and the current value)
    #[must_use]
    pub fn with_default(self, value: &str) -> Self {
        {
            let mut state = self.state.write();
            state.default_value = value.to_string();
            state.value = value.to_string();
        }
        self
    }

    /// Element id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this is a checkbox
    #[must_use]
    pub fn is_checkbox(&self) -> bool {
        self.state.read().kind == InputKind::Checkbox
    }

    /// Tick or untick the checkbox
    pub fn set_checked(&self, checked: bool) {
        self.state.write().checked = checked;
    }

    /// Read an attribute
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.read().attributes.get(name).cloned()
    }
}

impl InputElement for MemoryInput {
    fn value(&self) -> String {
        self.state.read().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.write().value = value.to_string();
    }

    fn is_checked(&self) -> bool {
        let state = self.state.read();
        state.kind == InputKind::Checkbox && state.checked
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .write()
            .attributes
            .insert(name.to_string(), value.to_string());
    }
}

#[derive(Debug, Default)]
struct ErrorState {
    text: String,
    visible: bool,
}

/// An error display element
#[derive(Debug, Clone, Default)]
pub struct MemoryErrorSlot {
    state: Arc<RwLock<ErrorState>>,
}

impl MemoryErrorSlot {
    /// Displayed text
    #[must_use]
    pub fn text(&self) -> String {
        self.state.read().text.clone()
    }

    /// Whether the element is shown
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.read().visible
    }
}

impl ErrorElement for MemoryErrorSlot {
    fn show(&self, message: &str) {
        let mut state = self.state.write();
        state.text = message.to_string();
        state.visible = true;
    }

    fn clear(&self) {
        let mut state = self.state.write();
        state.text.clear();
        state.visible = false;
    }
}

struct FormInner {
    id: String,
    inputs: RwLock<Vec<MemoryInput>>,
    error_slots: RwLock<Vec<(String, MemoryErrorSlot)>>,
    listeners: Mutex<Vec<SubmitListener<MemoryForm>>>,
}

/// A form element holding inputs, error displays and submit listeners
///
/// # Examples
///
/// ```rust
/// use hotel_forms::dom::{MemoryForm, MemoryInput};
///
/// let form = MemoryForm::new("contact-form")
///     .with_field(MemoryInput::text("name"))
///     .with_field(MemoryInput::checkbox("privacy"));
///
/// form.fill("name", "Ivan Ivanov").check("privacy", true);
/// assert!(form.error_slot("name").is_some());
/// ```
#[derive(Clone)]
pub struct MemoryForm {
    inner: Arc<FormInner>,
}

impl fmt::Debug for MemoryForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryForm")
            .field("id", &self.inner.id)
            .field("inputs", &self.inner.inputs.read().len())
            .field("error_slots", &self.inner.error_slots.read().len())
            .field(
                "listeners",
                &self.inner.listeners.try_lock().map(|listeners| listeners.len()),
            )
            .finish()
    }
}

impl MemoryForm {
    /// Create an empty form
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            inner: Arc::new(FormInner {
                id: id.to_string(),
                inputs: RwLock::new(Vec::new()),
                error_slots: RwLock::new(Vec::new()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Add an input together with its `{id}-error` display
    #[must_use]
    pub fn with_field(self, input: MemoryInput) -> Self {
        let field_id = input.id().to_string();
        self.with_input(input).with_error_slot(&field_id)
    }

    /// Add an input without an error display
    #[must_use]
    pub fn with_input(self, input: MemoryInput) -> Self {
        self.inner.inputs.write().push(input);
        self
    }

    /// Add an error display for a field
    #[must_use]
    pub fn with_error_slot(self, field_id: &str) -> Self {
        self.inner
            .error_slots
            .write()
            .push((error_element_id(field_id), MemoryErrorSlot::default()));
        self
    }

    /// Form element id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Get an input handle
    #[must_use]
    pub fn input_handle(&self, id: &str) -> Option<MemoryInput> {
        self.inner
            .inputs
            .read()
            .iter()
            .find(|input| input.id() == id)
            .cloned()
    }

    /// Get the error display for a field
    #[must_use]
    pub fn error_slot(&self, field_id: &str) -> Option<MemoryErrorSlot> {
        let element_id = error_element_id(field_id);
        self.inner
            .error_slots
            .read()
            .iter()
            .find(|(id, _)| *id == element_id)
            .map(|(_, slot)| slot.clone())
    }

    /// Type a value into an input
    pub fn fill(&self, id: &str, value: &str) -> &Self {
        match self.input_handle(id) {
            Some(input) => input.set_value(value),
            None => tracing::warn!(form = %self.inner.id, input = id, "fill: no such input"),
        }
        self
    }

    /// Set a checkbox
    pub fn check(&self, id: &str, checked: bool) -> &Self {
        match self.input_handle(id) {
            Some(input) => input.set_checked(checked),
            None => tracing::warn!(form = %self.inner.id, input = id, "check: no such input"),
        }
        self
    }

    /// Visible error messages as `(element id, text)`, in markup order
    #[must_use]
    pub fn visible_errors(&self) -> Vec<(String, String)> {
        self.inner
            .error_slots
            .read()
            .iter()
            .filter(|(_, slot)| slot.is_visible())
            .map(|(id, slot)| (id.clone(), slot.text()))
            .collect()
    }

    /// Number of registered submit listeners
    ///
    /// Listeners currently being dispatched are not counted.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Dispatch a submit event to every listener, in registration order
    ///
    /// The listener list is not locked while listeners run. Listeners they
    /// register are kept and first run on the next submit.
    pub fn submit(&self) -> SubmitEvent {
        let mut event = SubmitEvent::new();
        let mut listeners = std::mem::take(&mut *self.inner.listeners.lock());
        for listener in &mut listeners {
            listener(self, &mut event);
        }

        let mut slot = self.inner.listeners.lock();
        listeners.append(&mut slot);
        *slot = listeners;
        event
    }

    #[cfg(test)]
    pub(crate) fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl FormElement for MemoryForm {
    type Input = MemoryInput;
    type Error = MemoryErrorSlot;

    fn input(&self, id: &str) -> Option<Self::Input> {
        self.input_handle(id)
    }

    fn error_element(&self, field_id: &str) -> Option<Self::Error> {
        self.error_slot(field_id)
    }

    fn reset(&self) {
        for input in self.inner.inputs.read().iter() {
            let mut state = input.state.write();
            state.value = state.default_value.clone();
            state.checked = state.default_checked;
        }
    }

    fn on_submit(&self, listener: SubmitListener<Self>) {
        self.inner.listeners.lock().push(listener);
    }
}

#[derive(Debug, Default)]
struct VideoState {
    source: Option<String>,
    loads: usize,
    playing: bool,
}

struct VideoInner {
    id: String,
    state: RwLock<VideoState>,
    listeners: Mutex<Vec<EndedListener<MemoryVideo>>>,
}

/// A video element that "buffers" instantly
///
/// Playback never ends on its own; call [`Self::end`] to finish the clip.
#[derive(Clone)]
pub struct MemoryVideo {
    inner: Arc<VideoInner>,
}

impl fmt::Debug for MemoryVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryVideo")
            .field("id", &self.inner.id)
            .field("state", &*self.inner.state.read())
            .finish_non_exhaustive()
    }
}

impl MemoryVideo {
    /// Create a paused video element with no source
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            inner: Arc::new(VideoInner {
                id: id.to_string(),
                state: RwLock::new(VideoState::default()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Element id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Current source URL
    #[must_use]
    pub fn source(&self) -> Option<String> {
        self.inner.state.read().source.clone()
    }

    /// Whether a clip is playing
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.inner.state.read().playing
    }

    /// How many times a source was loaded
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.inner.state.read().loads
    }

    /// Finish the current clip and run the `ended` listeners
    pub fn end(&self) {
        self.inner.state.write().playing = false;

        let mut listeners = std::mem::take(&mut *self.inner.listeners.lock());
        for listener in &mut listeners {
            listener(self);
        }

        let mut slot = self.inner.listeners.lock();
        listeners.append(&mut slot);
        *slot = listeners;
    }
}

impl VideoSurface for MemoryVideo {
    fn pause(&self) {
        self.inner.state.write().playing = false;
    }

    fn set_source(&self, src: &str) {
        let mut state = self.inner.state.write();
        state.source = Some(src.to_string());
        state.playing = false;
    }

    fn load(&self) {
        self.inner.state.write().loads += 1;
    }

    fn play_when_ready(&self) {
        let mut state = self.inner.state.write();
        state.playing = state.source.is_some();
    }

    fn on_ended(&self, listener: EndedListener<Self>) {
        self.inner.listeners.lock().push(listener);
    }
}

/// A page holding forms, standalone inputs, placeholders, buttons and videos
///
/// Buttons are matched by the exact selector they were added with, e.g.
/// `.subscribe-btn`.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    forms: Arc<RwLock<Vec<MemoryForm>>>,
    inputs: Arc<RwLock<Vec<MemoryInput>>>,
    placeholders: Arc<RwLock<HashMap<String, String>>>,
    videos: Arc<RwLock<Vec<MemoryVideo>>>,
    buttons: Arc<Mutex<HashMap<String, Vec<ClickListener>>>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("forms", &*self.forms.read())
            .field("inputs", &*self.inputs.read())
            .field("placeholders", &*self.placeholders.read())
            .field("videos", &*self.videos.read())
            .field(
                "buttons",
                &self
                    .buttons
                    .try_lock()
                    .map(|buttons| buttons.keys().cloned().collect::<Vec<_>>()),
            )
            .finish()
    }
}

impl MemoryDocument {
    /// Create an empty page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a form
    #[must_use]
    pub fn with_form(self, form: MemoryForm) -> Self {
        self.forms.write().push(form);
        self
    }

    /// Add an input that is not inside a form
    #[must_use]
    pub fn with_input(self, input: MemoryInput) -> Self {
        self.inputs.write().push(input);
        self
    }

    /// Add an empty placeholder element
    #[must_use]
    pub fn with_placeholder(self, id: &str) -> Self {
        self.placeholders.write().insert(id.to_string(), String::new());
        self
    }

    /// Add a video element
    #[must_use]
    pub fn with_video(self, video: MemoryVideo) -> Self {
        self.videos.write().push(video);
        self
    }

    /// Add a button matched by `selector`
    #[must_use]
    pub fn with_button(self, selector: &str) -> Self {
        self.buttons.lock().entry(selector.to_string()).or_default();
        self
    }

    /// Current inner HTML of a placeholder
    #[must_use]
    pub fn placeholder_html(&self, id: &str) -> Option<String> {
        self.placeholders.read().get(id).cloned()
    }

    /// Number of click listeners on a button
    #[must_use]
    pub fn click_listener_count(&self, selector: &str) -> usize {
        self.buttons.lock().get(selector).map_or(0, Vec::len)
    }

    /// Click a button, running its listeners in registration order
    ///
    /// Returns `false` if no button matches.
    pub fn click(&self, selector: &str) -> bool {
        let Some(mut listeners) = self.buttons.lock().get_mut(selector).map(std::mem::take) else {
            return false;
        };
        for listener in &mut listeners {
            listener();
        }

        if let Some(slot) = self.buttons.lock().get_mut(selector) {
            listeners.append(slot);
            *slot = listeners;
        }
        true
    }
}

impl Document for MemoryDocument {
    type Form = MemoryForm;
    type Video = MemoryVideo;

    fn form(&self, id: &str) -> Option<Self::Form> {
        self.forms.read().iter().find(|form| form.id() == id).cloned()
    }

    fn input(&self, id: &str) -> Option<MemoryInput> {
        self.forms
            .read()
            .iter()
            .find_map(|form| form.input_handle(id))
            .or_else(|| self.inputs.read().iter().find(|input| input.id() == id).cloned())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        match self.placeholders.write().get_mut(id) {
            Some(content) => {
                *content = html.to_string();
                true
            }
            None => false,
        }
    }

    fn video(&self, id: &str) -> Option<Self::Video> {
        self.videos.read().iter().find(|video| video.id() == id).cloned()
    }

    fn on_click(&self, selector: &str, listener: ClickListener) -> bool {
        match self.buttons.lock().get_mut(selector) {
            Some(listeners) => {
                listeners.push(listener);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_element_id() {
        assert_eq!(error_element_id("first-name"), "first-name-error");
    }

    #[test]
    fn test_input_value_and_reset() {
        let form = MemoryForm::new("f")
            .with_field(MemoryInput::text("room-type").with_default("double"))
            .with_field(MemoryInput::checkbox("privacy"));

        form.fill("room-type", "suite").check("privacy", true);
        let room = form.input_handle("room-type").unwrap();
        assert_eq!(room.value(), "suite");
        assert!(form.input_handle("privacy").unwrap().is_checked());

        form.reset();
        assert_eq!(room.value(), "double");
        assert!(!form.input_handle("privacy").unwrap().is_checked());
    }

    #[test]
    fn test_text_input_is_never_checked() {
        let input = MemoryInput::text("name");
        input.set_checked(true);
        assert!(!input.is_checked());
        assert!(!input.is_checkbox());
    }

    #[test]
    fn test_error_slot_show_and_clear() {
        let form = MemoryForm::new("f").with_field(MemoryInput::text("name"));
        let slot = form.error_element("name").unwrap();

        slot.show("Моля въведете вашето име.");
        assert_eq!(
            form.visible_errors(),
            vec![("name-error".to_string(), "Моля въведете вашето име.".to_string())]
        );

        slot.clear();
        assert!(form.visible_errors().is_empty());
        assert_eq!(slot.text(), "");
    }

    #[test]
    fn test_input_without_error_slot() {
        let form = MemoryForm::new("f").with_input(MemoryInput::text("phone"));
        assert!(form.input("phone").is_some());
        assert!(form.error_element("phone").is_none());
    }

    #[test]
    fn test_submit_runs_listeners_in_order() {
        let form = MemoryForm::new("f");
        let calls = Arc::new(Mutex::new(Vec::new()));

        for n in 0..2 {
            let calls = Arc::clone(&calls);
            form.on_submit(Box::new(move |_: &MemoryForm, event: &mut SubmitEvent| {
                calls.lock().push(n);
                event.prevent_default();
            }));
        }

        let event = form.submit();
        assert!(event.default_prevented());
        assert_eq!(*calls.lock(), vec![0, 1]);
        assert_eq!(form.listener_count(), 2);
    }

    #[test]
    fn test_listener_can_register_during_submit() {
        let form = MemoryForm::new("f");
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        form.on_submit(Box::new(move |form: &MemoryForm, _: &mut SubmitEvent| {
            log.lock().push(form.listener_count());
            let log = Arc::clone(&log);
            form.on_submit(Box::new(move |_: &MemoryForm, _: &mut SubmitEvent| {
                log.lock().push(usize::MAX);
            }));
        }));

        form.submit();
        assert_eq!(*seen.lock(), vec![0]);
        assert_eq!(form.listener_count(), 2);

        form.submit();
        assert_eq!(*seen.lock(), vec![0, 0, usize::MAX]);
        assert_eq!(form.listener_count(), 3);
    }

    #[test]
    fn test_listener_can_resubmit() {
        let form = MemoryForm::new("f");
        let nested = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&nested);
        form.on_submit(Box::new(move |form: &MemoryForm, event: &mut SubmitEvent| {
            event.prevent_default();
            log.lock().push(form.submit().default_prevented());
        }));

        assert!(form.submit().default_prevented());
        assert_eq!(*nested.lock(), vec![false]);
        assert_eq!(form.listener_count(), 1);
    }

    #[test]
    fn test_submit_without_listeners_is_not_prevented() {
        assert!(!MemoryForm::new("f").submit().default_prevented());
    }

    #[test]
    fn test_document_lookup() {
        let document = MemoryDocument::new()
            .with_form(MemoryForm::new("reservation-form").with_field(MemoryInput::text("arrival-date")))
            .with_input(MemoryInput::text("footer-email"))
            .with_placeholder("header-placeholder");

        assert!(document.form("reservation-form").is_some());
        assert!(document.form("contact-form").is_none());
        assert!(document.input("arrival-date").is_some());
        assert!(document.input("footer-email").is_some());
        assert!(document.input("missing").is_none());

        assert!(document.set_inner_html("header-placeholder", "<nav></nav>"));
        assert!(!document.set_inner_html("footer-placeholder", "<footer></footer>"));
        assert_eq!(
            document.placeholder_html("header-placeholder").as_deref(),
            Some("<nav></nav>")
        );
    }

    #[test]
    fn test_click_runs_listeners() {
        let document = MemoryDocument::new().with_button(".subscribe-btn");
        let clicks = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&clicks);
        assert!(document.on_click(".subscribe-btn", Box::new(move || *counter.lock() += 1)));
        assert!(!document.on_click("#missing", Box::new(|| {})));

        assert!(document.click(".subscribe-btn"));
        assert!(document.click(".subscribe-btn"));
        assert!(!document.click("#missing"));
        assert_eq!(*clicks.lock(), 2);
        assert_eq!(document.click_listener_count(".subscribe-btn"), 1);
    }

    #[test]
    fn test_video_playback_and_end() {
        let video = MemoryVideo::new("rotating-video");
        let document = MemoryDocument::new().with_video(video.clone());
        let found = document.video("rotating-video").unwrap();
        assert!(document.video("other").is_none());

        found.play_when_ready();
        assert!(!video.is_playing());

        found.set_source("videos/video1.mp4");
        found.load();
        found.play_when_ready();
        assert!(video.is_playing());
        assert_eq!(video.load_count(), 1);

        let ended = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&ended);
        found.on_ended(Box::new(move |video: &MemoryVideo| log.lock().push(video.source())));

        video.end();
        assert!(!video.is_playing());
        assert_eq!(*ended.lock(), vec![Some("videos/video1.mp4".to_string())]);
    }

    #[test]
    fn test_set_attribute() {
        let input = MemoryInput::text("arrival-date");
        input.set_attribute("min", "2026-10-19");
        assert_eq!(input.attribute("min").as_deref(), Some("2026-10-19"));
        assert_eq!(input.attribute("max"), None);
    }
}
