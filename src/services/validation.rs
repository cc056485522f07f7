use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::i18n::Locale;
use crate::models::{BookingDraft, BookingRequest, Field, FieldErrors, TimeSlot};
use crate::services::calendar;

// Dotted domain ending in a TLD of two or more letters, and a local part
// that does not end with a dot. The leading-dot and double-dot rules need
// lookahead, so `is_deliverable_email` checks those separately.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Stricter than the validator crate's email check: `a@localhost`,
/// `.a@x.com` and `ab.@x.com` are all refused.
pub fn is_deliverable_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Checks every field of the draft and reports all failures at once.
pub fn validate_booking(
    draft: &BookingDraft,
    now: NaiveDateTime,
    locale: Locale,
) -> Result<BookingRequest, FieldErrors> {
    let catalog = locale.catalog();
    let mut errors = FieldErrors::default();

    if let Err(report) = draft.validate() {
        for error in report.field_errors().into_values().flatten() {
            let Some(field) = Field::from_key(&error.code) else {
                continue;
            };
            if let Some(text) = catalog.field(field) {
                errors.add(field, text.invalid);
            }
        }
    }

    if !errors.contains(Field::Email) && !is_deliverable_email(&draft.email) {
        errors.add(Field::Email, catalog.email.invalid);
    }

    let date = match draft.appointment_date {
        Some(date) if calendar::is_selectable(date, now) => Some(date),
        Some(_) => {
            errors.add(Field::AppointmentDate, catalog.date_unavailable);
            None
        }
        None => {
            errors.add(Field::AppointmentDate, catalog.date_required);
            None
        }
    };

    let slot = draft.appointment_time.as_deref().and_then(TimeSlot::parse);
    if slot.is_none() {
        errors.add(Field::AppointmentTime, catalog.time_required);
    }

    match (date, slot) {
        (Some(appointment_date), Some(appointment_time)) if errors.is_empty() => {
            Ok(BookingRequest {
                name: draft.name.clone(),
                email: draft.email.clone(),
                phone: draft.phone.clone(),
                organization: draft.organization.clone(),
                visit_reason: draft.visit_reason.clone(),
                message: draft.message.clone(),
                appointment_date,
                appointment_time,
            })
        }
        _ => Err(errors),
    }
}
