//! Public booking routes, mounted at `/bookings`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// ```text
/// POST   /                  -> create_booking
/// GET    /availability      -> get_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(bookings::create_booking))
        .route("/availability", get(bookings::get_availability))
}
