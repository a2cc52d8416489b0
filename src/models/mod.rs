pub mod booking;
pub mod doctor;
pub mod service;
pub mod user;

pub use booking::*;
pub use doctor::*;
pub use service::*;
pub use user::*;
