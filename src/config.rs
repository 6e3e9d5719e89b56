use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medicate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment override for the SQLite database location.
pub const DB_PATH_ENV: &str = "MEDICATE_DB_PATH";

/// Environment override for the HTTP listen address.
pub const BIND_ADDR_ENV: &str = "MEDICATE_BIND_ADDR";

/// Listen address when `MEDICATE_BIND_ADDR` is unset or unparsable.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8085";

/// Tracing filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medicate_lib=info,medicate=info"
}

/// Get the application data directory.
/// ~/Medicate/ on all platforms, falling back to the working directory
/// when no home directory can be determined (containers, CI).
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Path of the advisor database (catalog, patients, prediction history).
pub fn database_path() -> PathBuf {
    match std::env::var(DB_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => app_data_dir().join("medicate.db"),
    }
}

/// Address the HTTP API binds to.
pub fn bind_addr() -> SocketAddr {
    parse_bind_addr(std::env::var(BIND_ADDR_ENV).ok().as_deref())
}

fn parse_bind_addr(raw: Option<&str>) -> SocketAddr {
    let fallback = || {
        DEFAULT_BIND_ADDR
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8085)))
    };
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.parse().unwrap_or_else(|_| {
            tracing::warn!(value = s, "Invalid {BIND_ADDR_ENV}, using default");
            fallback()
        }),
        _ => fallback(),
    }
}
