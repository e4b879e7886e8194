use axum::routing::post;
use axum::Router;

use crate::handlers::qr;
use crate::state::AppState;

/// QR generation routes mounted at `/qr`.
///
/// ```text
/// POST /  -> generate_qr
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(qr::generate_qr))
}
