use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Результат проверки доступности API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHealth {
    Unknown,
    Online,
    Offline,
}

/// `GET /api/health` без авторизации: любой 2xx означает "онлайн"
pub async fn check_health() -> ApiHealth {
    match Request::get(&api_url("/health")).send().await {
        Ok(response) if response.ok() => ApiHealth::Online,
        Ok(_) => ApiHealth::Offline,
        Err(_) => ApiHealth::Offline,
    }
}
