pub mod log;

use async_trait::async_trait;

use crate::models::BookingRequest;

/// Where validated booking requests go. Callers treat every hand-off as
/// successful; delivery, persistence and slot conflicts belong to the
/// implementation.
#[async_trait]
pub trait BookingSink: Send + Sync {
    async fn submit(&self, request: &BookingRequest);
}
