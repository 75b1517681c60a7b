use contracts::system::auth::TokenResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Вход по логину и паролю. Эндпоинт принимает form-encoded тело
/// (OAuth2 password flow), а не JSON.
pub async fn login(username: String, password: String) -> Result<TokenResponse, String> {
    let body = format!(
        "username={}&password={}",
        urlencoding::encode(&username),
        urlencoding::encode(&password)
    );

    let response = Request::post(&api_url("/auth/token"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Не удалось сформировать запрос: {e}"))?
        .send()
        .await
        .map_err(|_| "Ошибка подключения к серверу".to_string())?;

    if !response.ok() {
        return Err("Неверный логин или пароль".to_string());
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Не удалось разобрать ответ: {e}"))
}

/// Авторизованный GET. Единственный способ, которым загрузчики данных
/// ходят на бэкенд: bearer-токен прикладывается всегда.
pub async fn fetch_with_auth<T>(path: &str, token: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&api_url(path))
        .header("Authorization", &format!("Bearer {token}"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|_| "Ошибка подключения к серверу".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Не удалось разобрать ответ: {e}"))
}
