use std::sync::Arc;

use qrlink_core::encoder::QrEncoder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// QR encoding collaborator. Tests swap in stubs here.
    pub encoder: Arc<dyn QrEncoder>,
}
