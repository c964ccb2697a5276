//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Input structs for inserts and updates

pub mod booking;
pub mod contact;
pub mod newsletter;
pub mod schedule_setting;
