use axum::routing::post;
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Public contact form, mounted at `/contact`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contacts::submit_contact))
}
