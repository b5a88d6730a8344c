//! Assertion helpers for validated forms

use crate::dom::MemoryForm;
use crate::dom::memory::error_element_id;
use crate::notify::ToastBoard;

/// Assert that a field's error display shows `expected`
///
/// # Panics
///
/// Panics if the field has no error display, it is hidden, or it shows other text
pub fn assert_field_error(form: &MemoryForm, field_id: &str, expected: &str) {
    let slot = form
        .error_slot(field_id)
        .unwrap_or_else(|| panic!("no error display for field '{field_id}'"));
    assert!(slot.is_visible(), "error for '{field_id}' is hidden");
    assert_eq!(
        slot.text(),
        expected,
        "Expected error for '{field_id}' to be {expected:?}, got {:?}",
        slot.text()
    );
}

/// Assert that a field's error display is hidden and empty
///
/// # Panics
///
/// Panics if the error display is visible or still holds text
pub fn assert_field_clear(form: &MemoryForm, field_id: &str) {
    if let Some(slot) = form.error_slot(field_id) {
        assert!(
            !slot.is_visible() && slot.text().is_empty(),
            "Expected no error for '{field_id}', got {:?}",
            slot.text()
        );
    }
}

/// Assert that no error display in the form is visible
///
/// # Panics
///
/// Panics if any error is shown
pub fn assert_no_errors(form: &MemoryForm) {
    let visible = form.visible_errors();
    assert!(visible.is_empty(), "Expected no errors, got {visible:?}");
}

/// Assert exactly which fields show errors, in markup order
///
/// # Panics
///
/// Panics if the set of visible errors differs
pub fn assert_errors_on(form: &MemoryForm, field_ids: &[&str]) {
    let actual: Vec<String> = form.visible_errors().into_iter().map(|(id, _)| id).collect();
    let expected: Vec<String> = field_ids.iter().map(|id| error_element_id(id)).collect();
    assert_eq!(actual, expected, "Unexpected set of visible errors");
}

/// Assert that exactly these toasts are on screen
///
/// # Panics
///
/// Panics if the visible toasts differ
pub fn assert_toasts(board: &ToastBoard, expected: &[&str]) {
    assert_eq!(board.visible(), expected, "Unexpected toasts");
}
