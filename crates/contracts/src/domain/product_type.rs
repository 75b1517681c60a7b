use serde::{Deserialize, Serialize};

/// Тип продукции — справочник, на фронтенде только для чтения.
/// Используется для заполнения выпадающего списка в форме партии.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub type_code: String,
    pub type_name: String,
}

impl ProductType {
    /// Подпись для выпадающего списка: "КОД - Наименование"
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.type_code, self.type_name)
    }
}
