pub mod availability_service;
pub mod booking_service;
pub mod catalog_service;
pub mod doctor_service;
pub mod token_service;
pub mod user_service;
