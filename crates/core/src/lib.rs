//! Domain logic for the qrlink service.
//!
//! Holds everything that does not depend on HTTP: the error taxonomy, input
//! validation, render options, and the [`encoder::QrEncoder`] collaborator
//! the API delegates to.

pub mod encoder;
pub mod error;
pub mod render;
pub mod validation;
