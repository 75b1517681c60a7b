use contracts::domain::product_type::ProductType;

use crate::system::auth::api::fetch_with_auth;

/// Справочник типов продукции, страница фиксированного размера
pub async fn fetch_product_types(token: &str) -> Result<Vec<ProductType>, String> {
    fetch_with_auth("/product-types?limit=100", token).await
}
