use chrono::NaiveDateTime;

use crate::i18n::Locale;
use crate::models::{BookingDraft, FieldErrors};
use crate::services::submission::BookingSink;
use crate::services::validation::validate_booking;

/// Everything the booking page shows for one render: the draft, the inline
/// errors from the last submit attempt and an optional toast.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub draft: BookingDraft,
    pub errors: FieldErrors,
    pub notice: Option<&'static str>,
}

impl FormState {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    /// Validates and, if every field passes, hands the request to `sink` and
    /// resets the form. Returns whether the submission went through.
    pub async fn submit(
        &mut self,
        now: NaiveDateTime,
        locale: Locale,
        sink: &dyn BookingSink,
    ) -> bool {
        match validate_booking(&self.draft, now, locale) {
            Ok(request) => {
                sink.submit(&request).await;
                self.draft.reset();
                self.errors = FieldErrors::default();
                self.notice = Some(locale.catalog().submitted);
                true
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "booking form rejected");
                self.errors = errors;
                self.notice = None;
                false
            }
        }
    }
}
