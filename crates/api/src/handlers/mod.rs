pub mod bookings;
pub mod contacts;
pub mod dashboard;
pub mod newsletter;
pub mod settings;
