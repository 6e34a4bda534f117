//! Portfolio API endpoint configuration.

/// API origin used when `PORTFOLIO_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Returns the API origin, without a trailing slash.
pub fn api_base_url() -> &'static str {
    let base = option_env!("PORTFOLIO_API_BASE")
        .filter(|base| !base.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/')
}

/// Joins `path` onto the API origin.
pub fn api_url(path: &str) -> String {
    join_api_url(api_base_url(), path)
}

fn join_api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
