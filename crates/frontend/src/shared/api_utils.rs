//! API utilities for frontend-backend communication

/// Фиксированный базовый путь REST-бэкенда (фронтенд раздаётся с того же хоста)
pub const API_BASE: &str = "/api";

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("/batches?limit=100"), "/api/batches?limit=100");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}
