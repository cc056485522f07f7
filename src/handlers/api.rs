use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{features, BookingDraft, FeatureCard, TimeSlot};
use crate::services::calendar::MonthView;
use crate::services::validation::validate_booking;
use crate::state::AppState;

use super::booking::{resolve_month, MonthQuery};

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let request = validate_booking(&draft, state.clock.now(), state.config.locale)
        .map_err(AppError::Validation)?;

    state.sink.submit(&request).await;

    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "status": "accepted",
            "message": state.config.locale.catalog().submitted,
        })),
    ))
}

// GET /api/slots
pub async fn get_slots() -> Json<Vec<&'static str>> {
    Json(TimeSlot::ALL.iter().map(TimeSlot::label).collect())
}

// GET /api/calendar?month=YYYY-MM
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthView>, AppError> {
    let now = state.clock.now();
    let month = resolve_month(query.month.as_deref(), &BookingDraft::default(), now)?;
    Ok(Json(MonthView::build(
        month,
        now,
        state.config.locale.week_start(),
    )))
}

#[derive(Serialize)]
pub struct FeaturesResponse {
    features: &'static [FeatureCard; 3],
}

// GET /api/features
pub async fn get_features(State(state): State<Arc<AppState>>) -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        features: features(state.config.locale),
    })
}
