use contracts::domain::batch::{Batch, BatchDraft};
use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::api::fetch_with_auth;

/// Загрузка партий, страница фиксированного размера
pub async fn fetch_batches(token: &str) -> Result<Vec<Batch>, String> {
    fetch_with_auth("/batches?limit=100", token).await
}

/// Создать партию. Тело — JSON-черновик формы.
pub async fn create_batch(draft: &BatchDraft, token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/batches"))
        .header("Authorization", &format!("Bearer {token}"))
        .json(draft)
        .map_err(|e| format!("Не удалось сформировать запрос: {e}"))?
        .send()
        .await
        .map_err(|_| "Ошибка подключения к серверу".to_string())?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }
    Ok(())
}

/// Обновить существующую партию
pub async fn update_batch(id: i64, draft: &BatchDraft, token: &str) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/batches/{id}")))
        .header("Authorization", &format!("Bearer {token}"))
        .json(draft)
        .map_err(|e| format!("Не удалось сформировать запрос: {e}"))?
        .send()
        .await
        .map_err(|_| "Ошибка подключения к серверу".to_string())?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }
    Ok(())
}

/// Удалить партию
pub async fn delete_batch(id: i64, token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/batches/{id}")))
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|_| "Ошибка подключения к серверу".to_string())?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }
    Ok(())
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Бизнес-ошибки бэкенд отдаёт в поле `detail`; показываем его дословно,
/// иначе — общее сообщение со статусом.
async fn error_detail(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody { detail: Some(d) }) => d,
        _ => format!("Неизвестная ошибка (HTTP {status})"),
    }
}
