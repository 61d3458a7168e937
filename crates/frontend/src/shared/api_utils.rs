//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// The base is baked in at build time from the `API_BASE` environment
/// variable. When unset it is empty, which makes every request
/// same-origin relative.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_base;
/// let url = format!("{}/api/order/orders", api_base());
/// ```
pub fn api_base() -> &'static str {
    option_env!("API_BASE").unwrap_or("")
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/order/orders/cancel/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_keeps_path() {
        assert!(api_url("/api/order/orders").ends_with("/api/order/orders"));
    }
}
