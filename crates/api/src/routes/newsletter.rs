use axum::routing::post;
use axum::Router;

use crate::handlers::newsletter;
use crate::state::AppState;

/// Public newsletter routes, mounted at `/newsletter`.
///
/// ```text
/// POST   /subscribe         -> subscribe
/// POST   /unsubscribe       -> unsubscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(newsletter::subscribe))
        .route("/unsubscribe", post(newsletter::unsubscribe))
}
