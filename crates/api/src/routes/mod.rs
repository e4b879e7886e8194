pub mod health;
pub mod qr;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /qr                                              generate QR code (POST)
/// /qr/                                             same, trailing-slash form
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/qr", qr::router())
        // A nested "/" only matches "/qr" itself.
        .route("/qr/", post(handlers::qr::generate_qr))
}
