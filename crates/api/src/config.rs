use qrlink_core::render::{ErrorCorrection, RenderOptions};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How generated QR codes are rasterized.
    pub qr: RenderOptions,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `QR_ERROR_CORRECTION`  | `M`                        |
    /// | `QR_SCALE`             | `4`                        |
    /// | `QR_MARGIN`            | `4`                        |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let qr = render_options_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            qr,
        }
    }
}

fn render_options_from_env() -> RenderOptions {
    let defaults = RenderOptions::default();

    let error_correction: ErrorCorrection = match std::env::var("QR_ERROR_CORRECTION") {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("QR_ERROR_CORRECTION is invalid: {e}")),
        Err(_) => defaults.error_correction,
    };

    let scale: u32 = std::env::var("QR_SCALE")
        .map(|raw| raw.parse().expect("QR_SCALE must be a valid u32"))
        .unwrap_or(defaults.scale);

    let margin: u32 = std::env::var("QR_MARGIN")
        .map(|raw| raw.parse().expect("QR_MARGIN must be a valid u32"))
        .unwrap_or(defaults.margin);

    let options = RenderOptions {
        error_correction,
        scale,
        margin,
    };
    if let Err(e) = options.validate() {
        panic!("Invalid QR render configuration: {e}");
    }
    options
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
