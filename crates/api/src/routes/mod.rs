pub mod admin;
pub mod bookings;
pub mod contact;
pub mod health;
pub mod newsletter;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /bookings                                 create booking (POST)
/// /bookings/availability                    open slots for a date (GET)
///
/// /contact                                  submit contact message (POST)
///
/// /newsletter/subscribe                     subscribe (POST)
/// /newsletter/unsubscribe                   unsubscribe (POST)
///
/// /admin/stats                              dashboard summary (GET)
/// /admin/settings                           get, replace (GET, PUT)
/// /admin/bookings                           list (GET)
/// /admin/bookings/stats                     booking statistics (GET)
/// /admin/bookings/bulk-delete               delete several (POST)
/// /admin/bookings/{id}                      get, update status, delete
/// /admin/contacts                           list (GET)
/// /admin/contacts/stats                     contact statistics (GET)
/// /admin/contacts/bulk-delete               delete several (POST)
/// /admin/contacts/{id}                      get, update status, delete
/// /admin/newsletter                         list (GET)
/// /admin/newsletter/stats                   subscriber statistics (GET)
/// /admin/newsletter/bulk-delete             delete several (POST)
/// /admin/newsletter/{id}                    get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bookings", bookings::router())
        .nest("/contact", contact::router())
        .nest("/newsletter", newsletter::router())
        .nest("/admin", admin::router())
}
