use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::BookingDraft;
use crate::services::booking_form::FormState;
use crate::services::calendar::{self, MonthView, YearMonth};
use crate::state::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

/// Month shown by the picker: the requested one, else the month of the
/// picked date, else the month of the first bookable day.
pub fn resolve_month(
    requested: Option<&str>,
    draft: &BookingDraft,
    now: NaiveDateTime,
) -> Result<YearMonth, AppError> {
    match requested.filter(|m| !m.trim().is_empty()) {
        Some(m) => YearMonth::parse(m),
        None => Ok(YearMonth::of(
            draft
                .appointment_date
                .unwrap_or_else(|| calendar::first_selectable(now)),
        )),
    }
}

fn render(state: &AppState, form: &FormState, month: YearMonth, now: NaiveDateTime) -> String {
    let locale = state.config.locale;
    let view = MonthView::build(month, now, locale.week_start());
    views::render_booking_page(form, &view, locale)
}

// GET /book
// The month buttons submit the form with GET, so the query also carries
// whatever the visitor has typed so far.
pub async fn booking_page(
    State(state): State<Arc<AppState>>,
    Query(month): Query<MonthQuery>,
    Query(draft): Query<BookingDraft>,
) -> Result<Html<String>, AppError> {
    let now = state.clock.now();
    let month = resolve_month(month.month.as_deref(), &draft, now)?;
    let form = FormState::new(draft);
    Ok(Html(render(&state, &form, month, now)))
}

// POST /book
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<BookingDraft>,
) -> Response {
    let now = state.clock.now();
    let locale = state.config.locale;
    let mut form = FormState::new(draft);

    let accepted = form.submit(now, locale, state.sink.as_ref()).await;
    let month = YearMonth::of(
        form.draft
            .appointment_date
            .unwrap_or_else(|| calendar::first_selectable(now)),
    );
    let html = Html(render(&state, &form, month, now));

    if accepted {
        tracing::info!("booking form submitted");
        (StatusCode::OK, html).into_response()
    } else {
        (StatusCode::UNPROCESSABLE_ENTITY, html).into_response()
    }
}
