//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod contact_repo;
pub mod newsletter_repo;
pub mod schedule_settings_repo;

pub use booking_repo::BookingRepo;
pub use contact_repo::ContactRepo;
pub use newsletter_repo::NewsletterRepo;
pub use schedule_settings_repo::ScheduleSettingsRepo;
