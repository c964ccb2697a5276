//! Outbound notifications for bookings, contact messages and newsletter
//! subscriptions.
//!
//! - [`Notifier`]: the seam request handlers talk to.
//! - [`EmailNotifier`]: SMTP delivery via `lettre`.
//! - [`LogNotifier`]: used when SMTP is not configured; only logs.
//! - [`spawn_notification`]: fire-and-forget dispatch whose failures are
//!   logged and never reach the caller.

pub mod delivery;
pub mod dispatch;
pub mod notifier;
pub mod templates;

pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};
pub use dispatch::spawn_notification;
pub use notifier::{EmailNotifier, LogNotifier, Notifier, NotifyError};
