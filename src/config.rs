//! API Base URL Configuration

/// Compile-time override for local development; `/api` in production where
/// the backend is reverse-proxied under the same origin.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("/api")
}
