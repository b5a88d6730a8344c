//! The two forms shipped with the site

use super::field::FieldDescriptor;
use super::schema::FormSchema;

/// Element id of the contact form
pub const CONTACT_FORM_ID: &str = "contact-form";

/// Element id of the reservation form
pub const RESERVATION_FORM_ID: &str = "reservation-form";

/// Contact page form: name, e-mail, message and privacy consent
#[must_use]
pub fn contact_form() -> FormSchema {
    build(
        CONTACT_FORM_ID,
        vec![
            FieldDescriptor::text("name", "Моля въведете вашето име."),
            FieldDescriptor::email("email", "Моля въведете вашия e-mail."),
            FieldDescriptor::text("message", "Моля въведете съобщение."),
            FieldDescriptor::checkbox(
                "privacy",
                "Необходимо е съгласие с политиката за поверителност.",
            ),
        ],
        "Вашето съобщение е изпратено успешно!",
    )
}

/// Reservation page form
///
/// Each numeric field is declared once, with both bounds.
#[must_use]
pub fn reservation_form() -> FormSchema {
    build(
        RESERVATION_FORM_ID,
        vec![
            FieldDescriptor::text("first-name", "Моля въведете собствено име."),
            FieldDescriptor::text("middle-name", "Моля въведете презиме."),
            FieldDescriptor::text("last-name", "Моля въведете фамилия."),
            FieldDescriptor::email("email", "Моля въведете e-mail."),
            FieldDescriptor::text("phone", "Моля въведете телефон."),
            FieldDescriptor::text("arrival-date", "Моля изберете дата на пристигане."),
            FieldDescriptor::text("arrival-time", "Моля изберете час на пристигане."),
            FieldDescriptor::text("nights", "Моля въведете брой нощувки.")
                .range(1.0, 30.0)
                .min_message("Броят нощувки трябва да е поне 1.")
                .max_message("Броят нощувки не може да надвишава 30."),
            FieldDescriptor::text("room-type", "Моля изберете вид резервация."),
            FieldDescriptor::text("adults", "Моля въведете брой възрастни.")
                .range(1.0, 100.0)
                .min_message("Поне един възрастен е необходим.")
                .max_message("Максималният брой възрастни е 100."),
            FieldDescriptor::text("children", "")
                .optional()
                .range(0.0, 100.0)
                .min_message("Броят деца не може да бъде отрицателен.")
                .max_message("Максималният брой деца е 100."),
            FieldDescriptor::checkbox(
                "agree-terms",
                "Трябва да сте съгласен с политиката на хотела.",
            ),
        ],
        "Вашата резервация е направена успешно! Благодарим Ви!",
    )
}

/// Both site forms
#[must_use]
pub fn all() -> Vec<FormSchema> {
    vec![contact_form(), reservation_form()]
}

fn build(id: &str, fields: Vec<FieldDescriptor>, success_message: &str) -> FormSchema {
    FormSchema::new(id, fields, success_message).expect("built-in form tables are well formed")
}
