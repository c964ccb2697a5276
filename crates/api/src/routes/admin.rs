//! Administration routes, mounted at `/admin`.
//!
//! These routes carry no authentication of their own. They are expected to be
//! exposed only behind an authenticating reverse proxy.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{bookings, contacts, dashboard, newsletter, settings};
use crate::state::AppState;

/// ```text
/// GET    /stats                        -> dashboard::get_stats
///
/// GET    /settings                     -> settings::get_settings
/// PUT    /settings                     -> settings::update_settings
///
/// GET    /bookings                     -> bookings::list_bookings
/// GET    /bookings/stats               -> bookings::booking_stats
/// POST   /bookings/bulk-delete         -> bookings::bulk_delete_bookings
/// GET    /bookings/{id}                -> bookings::get_booking
/// PATCH  /bookings/{id}                -> bookings::update_booking_status
/// DELETE /bookings/{id}                -> bookings::delete_booking
///
/// GET    /contacts                     -> contacts::list_contacts
/// GET    /contacts/stats               -> contacts::contact_stats
/// POST   /contacts/bulk-delete         -> contacts::bulk_delete_contacts
/// GET    /contacts/{id}                -> contacts::get_contact
/// PATCH  /contacts/{id}                -> contacts::update_contact_status
/// DELETE /contacts/{id}                -> contacts::delete_contact
///
/// GET    /newsletter                   -> newsletter::list_subscribers
/// GET    /newsletter/stats             -> newsletter::subscriber_stats
/// POST   /newsletter/bulk-delete       -> newsletter::bulk_delete_subscribers
/// GET    /newsletter/{id}              -> newsletter::get_subscriber
/// DELETE /newsletter/{id}              -> newsletter::delete_subscriber
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::get_stats))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/bookings", get(bookings::list_bookings))
        .route("/bookings/stats", get(bookings::booking_stats))
        .route("/bookings/bulk-delete", post(bookings::bulk_delete_bookings))
        .route(
            "/bookings/{id}",
            get(bookings::get_booking)
                .patch(bookings::update_booking_status)
                .delete(bookings::delete_booking),
        )
        .route("/contacts", get(contacts::list_contacts))
        .route("/contacts/stats", get(contacts::contact_stats))
        .route("/contacts/bulk-delete", post(contacts::bulk_delete_contacts))
        .route(
            "/contacts/{id}",
            get(contacts::get_contact)
                .patch(contacts::update_contact_status)
                .delete(contacts::delete_contact),
        )
        .route("/newsletter", get(newsletter::list_subscribers))
        .route("/newsletter/stats", get(newsletter::subscriber_stats))
        .route(
            "/newsletter/bulk-delete",
            post(newsletter::bulk_delete_subscribers),
        )
        .route(
            "/newsletter/{id}",
            get(newsletter::get_subscriber).delete(newsletter::delete_subscriber),
        )
}
