use contracts::domain::inspection::Inspection;

use crate::system::auth::api::fetch_with_auth;

/// Загрузка результатов контроля, страница фиксированного размера
pub async fn fetch_inspections(token: &str) -> Result<Vec<Inspection>, String> {
    fetch_with_auth("/inspections?limit=100", token).await
}
