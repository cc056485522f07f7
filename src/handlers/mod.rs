pub mod api;
pub mod booking;
pub mod health;
pub mod landing;
