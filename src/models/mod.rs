pub mod booking;
pub mod feature;

pub use booking::{BookingDraft, BookingRequest, Field, FieldErrors, TimeSlot};
pub use feature::{features, FeatureCard, Gradient, Icon};
