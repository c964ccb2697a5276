//! Plain-text email bodies for each notification kind.

use novus_core::booking::BookingStatus;
use novus_db::models::booking::Booking;
use novus_db::models::contact::Contact;
use novus_db::models::newsletter::Subscriber;

/// Subject and body of an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

/// Sent to the requester right after a booking is created.
pub fn booking_confirmation(booking: &Booking) -> EmailMessage {
    let mut body = format!(
        "Hi {name},\n\n\
         We have received your consultation request.\n\n\
         Date: {date}\n\
         Time: {time}\n\
         Status: {status}\n",
        name = booking.name,
        date = booking.date.format("%A, %B %-d, %Y"),
        time = booking.time_slot,
        status = booking.status,
    );
    if let Some(company) = booking.company.as_deref().filter(|c| !c.is_empty()) {
        body.push_str(&format!("Company: {company}\n"));
    }
    body.push_str(
        "\nWe will confirm your appointment shortly. \
         Reply to this email if you need to make changes.\n",
    );

    EmailMessage {
        subject: format!("Booking received: {} at {}", booking.date, booking.time_slot),
        body,
    }
}

/// Sent to the requester when an administrator changes the status.
pub fn booking_status_update(booking: &Booking, status: BookingStatus) -> EmailMessage {
    let summary = match status {
        BookingStatus::Pending => "Your booking is pending review.",
        BookingStatus::Confirmed => "Your booking has been confirmed. We look forward to speaking with you.",
        BookingStatus::Completed => "Thank you for meeting with us. Your consultation is marked as completed.",
        BookingStatus::Cancelled => "Your booking has been cancelled. You are welcome to book another time slot.",
    };

    EmailMessage {
        subject: format!("Booking {status}: {} at {}", booking.date, booking.time_slot),
        body: format!(
            "Hi {name},\n\n{summary}\n\nDate: {date}\nTime: {time}\n",
            name = booking.name,
            date = booking.date.format("%A, %B %-d, %Y"),
            time = booking.time_slot,
        ),
    }
}

/// Sent to the administrator inbox for each new contact message.
pub fn contact_notification(contact: &Contact) -> EmailMessage {
    let subject = contact.subject.as_deref().unwrap_or("(no subject)");
    EmailMessage {
        subject: format!("New contact message: {subject}"),
        body: format!(
            "From: {name} <{email}>\nSubject: {subject}\n\n{message}\n",
            name = contact.name,
            email = contact.email,
            message = contact.message,
        ),
    }
}

/// Sent to a new or returning newsletter subscriber.
pub fn newsletter_welcome(subscriber: &Subscriber) -> EmailMessage {
    EmailMessage {
        subject: "Welcome to our newsletter".to_string(),
        body: format!(
            "Thank you for subscribing with {email}.\n\n\
             You will receive our latest updates. \
             You can unsubscribe at any time.\n",
            email = subscriber.email,
        ),
    }
}
