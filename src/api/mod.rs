pub mod availability;
pub mod bookings;
pub mod doctors;
pub mod health;
pub mod services;
pub mod swagger;
pub mod users;
