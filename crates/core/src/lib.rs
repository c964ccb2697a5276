//! Domain types and pure business rules for the consultation booking backend.
//!
//! Nothing in this crate touches the database or the network, so every rule
//! here can be exercised with plain unit tests.

pub mod booking;
pub mod contact;
pub mod error;
pub mod newsletter;
pub mod pagination;
pub mod slots;
pub mod stats;
pub mod types;
pub mod validation;
