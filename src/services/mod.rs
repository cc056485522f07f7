pub mod booking_form;
pub mod calendar;
pub mod clock;
pub mod submission;
pub mod validation;
