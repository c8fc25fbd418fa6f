// Library for tests to access modules

pub mod collector;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod host_source;
pub mod models;
pub mod routes;
pub mod sampler;
pub mod sysinfo_repo;

/// Service name and version as built.
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// RFC 3339 UTC timestamp with millisecond precision, used in every response body.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
