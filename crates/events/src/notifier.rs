//! Notification seam and its implementations.

use async_trait::async_trait;
use novus_core::booking::BookingStatus;
use novus_db::models::booking::Booking;
use novus_db::models::contact::Contact;
use novus_db::models::newsletter::Subscriber;

use crate::delivery::email::{EmailDelivery, EmailError};
use crate::templates::{self, EmailMessage};

/// Error type for notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Email(#[from] EmailError),
}

/// Sends the side-effect notifications of the booking, contact and
/// newsletter flows. Every method may fail independently of the request
/// that triggered it.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), NotifyError>;

    async fn send_booking_status_update(
        &self,
        booking: &Booking,
        status: BookingStatus,
    ) -> Result<(), NotifyError>;

    async fn send_contact_notification(&self, contact: &Contact) -> Result<(), NotifyError>;

    async fn send_newsletter_welcome(&self, subscriber: &Subscriber) -> Result<(), NotifyError>;
}

// ---------------------------------------------------------------------------
// EmailNotifier
// ---------------------------------------------------------------------------

/// Delivers notifications by SMTP.
pub struct EmailNotifier {
    delivery: EmailDelivery,
}

impl EmailNotifier {
    pub fn new(delivery: EmailDelivery) -> Self {
        Self { delivery }
    }

    async fn send(&self, to: &str, message: EmailMessage) -> Result<(), NotifyError> {
        self.delivery.deliver(to, &message).await?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), NotifyError> {
        self.send(&booking.email, templates::booking_confirmation(booking))
            .await
    }

    async fn send_booking_status_update(
        &self,
        booking: &Booking,
        status: BookingStatus,
    ) -> Result<(), NotifyError> {
        self.send(&booking.email, templates::booking_status_update(booking, status))
            .await
    }

    async fn send_contact_notification(&self, contact: &Contact) -> Result<(), NotifyError> {
        let inbox = self.delivery.config().admin_inbox().to_string();
        self.send(&inbox, templates::contact_notification(contact))
            .await
    }

    async fn send_newsletter_welcome(&self, subscriber: &Subscriber) -> Result<(), NotifyError> {
        self.send(&subscriber.email, templates::newsletter_welcome(subscriber))
            .await
    }
}

// ---------------------------------------------------------------------------
// LogNotifier
// ---------------------------------------------------------------------------

/// Stand-in used when SMTP is not configured. Records what would have been
/// sent and always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), NotifyError> {
        tracing::info!(
            booking_id = booking.id,
            to = %booking.email,
            "Email disabled, skipping booking confirmation",
        );
        Ok(())
    }

    async fn send_booking_status_update(
        &self,
        booking: &Booking,
        status: BookingStatus,
    ) -> Result<(), NotifyError> {
        tracing::info!(
            booking_id = booking.id,
            to = %booking.email,
            %status,
            "Email disabled, skipping booking status update",
        );
        Ok(())
    }

    async fn send_contact_notification(&self, contact: &Contact) -> Result<(), NotifyError> {
        tracing::info!(
            contact_id = contact.id,
            "Email disabled, skipping contact notification",
        );
        Ok(())
    }

    async fn send_newsletter_welcome(&self, subscriber: &Subscriber) -> Result<(), NotifyError> {
        tracing::info!(
            subscriber_id = subscriber.id,
            "Email disabled, skipping newsletter welcome",
        );
        Ok(())
    }
}
