use async_trait::async_trait;
use uuid::Uuid;

use super::BookingSink;
use crate::models::BookingRequest;

/// Writes each request to the log and drops it.
pub struct LogSink;

#[async_trait]
impl BookingSink for LogSink {
    async fn submit(&self, request: &BookingRequest) {
        let submission_id = Uuid::new_v4();
        match serde_json::to_string(request) {
            Ok(json) => tracing::info!(
                %submission_id,
                starts_at = %request
                    .appointment_date
                    .and_time(request.appointment_time.start_time()),
                booking = %json,
                "booking request received"
            ),
            Err(e) => tracing::warn!(%submission_id, error = %e, "failed to serialize booking request"),
        }
    }
}
