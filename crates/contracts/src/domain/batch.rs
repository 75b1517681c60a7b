use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::product_type::ProductType;

// ============================================================================
// Статус партии
// ============================================================================

/// Статус производственной партии. Сериализуется в строковые значения,
/// которые хранит бэкенд.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchStatus {
    #[serde(rename = "в производстве")]
    InProduction,
    #[serde(rename = "произведено")]
    Produced,
    #[serde(rename = "отгружено")]
    Shipped,
}

impl BatchStatus {
    pub const ALL: [BatchStatus; 3] = [
        BatchStatus::InProduction,
        BatchStatus::Produced,
        BatchStatus::Shipped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::InProduction => "в производстве",
            BatchStatus::Produced => "произведено",
            BatchStatus::Shipped => "отгружено",
        }
    }

    /// CSS-класс для цветовой маркировки статуса в таблице
    pub fn css_class(&self) -> &'static str {
        match self {
            BatchStatus::InProduction => "status-in-production",
            BatchStatus::Produced => "status-produced",
            BatchStatus::Shipped => "status-shipped",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl Default for BatchStatus {
    fn default() -> Self {
        BatchStatus::InProduction
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Партия
// ============================================================================

/// Производственная партия, как её отдаёт бэкенд.
/// Кэш на фронтенде целиком заменяется после каждой успешной загрузки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: i64,
    pub batch_number: String,
    pub product_type_id: i64,
    /// Денормализованный справочник; бэкенд может его не вкладывать
    pub product_type: Option<ProductType>,
    pub production_date: NaiveDate,
    pub furnace_number: Option<String>,
    pub total_weight_kg: Option<f64>,
    pub total_length_m: Option<f64>,
    pub status: BatchStatus,
    pub quality_rating: Option<u8>,
}

impl Batch {
    /// Наименование типа продукции для отображения в таблице
    pub fn product_type_name(&self) -> String {
        self.product_type
            .as_ref()
            .map(|pt| pt.type_name.clone())
            .unwrap_or_else(|| "Не указан".to_string())
    }
}

// ============================================================================
// Черновик партии (форма создания/редактирования)
// ============================================================================

/// Тело запроса POST/PUT для партии. Зеркало модальной формы:
/// обязательны номер, тип продукции и дата производства.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchDraft {
    #[serde(skip_serializing)]
    pub id: Option<i64>,
    pub batch_number: String,
    pub product_type_id: Option<i64>,
    pub production_date: Option<NaiveDate>,
    pub furnace_number: Option<String>,
    pub total_weight_kg: Option<f64>,
    pub total_length_m: Option<f64>,
    pub status: BatchStatus,
}

impl BatchDraft {
    /// Черновик для редактирования: предзаполняется из кэшированной партии
    pub fn from_batch(batch: &Batch) -> Self {
        Self {
            id: Some(batch.id),
            batch_number: batch.batch_number.clone(),
            product_type_id: Some(batch.product_type_id),
            production_date: Some(batch.production_date),
            furnace_number: batch.furnace_number.clone(),
            total_weight_kg: batch.total_weight_kg,
            total_length_m: batch.total_length_m,
            status: batch.status,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Проверка перед отправкой: при любой ошибке сетевой запрос не выполняется
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_number.trim().is_empty() {
            return Err("Номер партии обязателен для заполнения".into());
        }
        if self.product_type_id.is_none() {
            return Err("Выберите тип продукции".into());
        }
        if self.production_date.is_none() {
            return Err("Дата производства обязательна для заполнения".into());
        }
        if self.total_weight_kg.is_some_and(|w| w < 0.0) {
            return Err("Вес не может быть отрицательным".into());
        }
        if self.total_length_m.is_some_and(|l| l < 0.0) {
            return Err("Длина не может быть отрицательной".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BatchDraft {
        BatchDraft {
            id: None,
            batch_number: "B-300".to_string(),
            product_type_id: Some(1),
            production_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            furnace_number: None,
            total_weight_kg: None,
            total_length_m: None,
            status: BatchStatus::InProduction,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_rejected() {
        // Номер есть, но нет типа продукции и даты
        let draft = BatchDraft {
            batch_number: "B-300".to_string(),
            ..BatchDraft::default()
        };
        assert!(draft.validate().is_err());

        let mut no_number = valid_draft();
        no_number.batch_number = "   ".to_string();
        assert!(no_number.validate().is_err());

        let mut no_date = valid_draft();
        no_date.production_date = None;
        assert!(no_date.validate().is_err());
    }

    #[test]
    fn negative_measures_rejected() {
        let mut draft = valid_draft();
        draft.total_weight_kg = Some(-1.0);
        assert!(draft.validate().is_err());

        let mut draft = valid_draft();
        draft.total_length_m = Some(-0.5);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn status_wire_format() {
        let json = serde_json::to_string(&BatchStatus::InProduction).unwrap();
        assert_eq!(json, "\"в производстве\"");

        let parsed: BatchStatus = serde_json::from_str("\"отгружено\"").unwrap();
        assert_eq!(parsed, BatchStatus::Shipped);

        assert_eq!(BatchStatus::parse("произведено"), Some(BatchStatus::Produced));
        assert_eq!(BatchStatus::parse("что-то другое"), None);
    }

    #[test]
    fn draft_body_omits_id() {
        let mut draft = valid_draft();
        draft.id = Some(42);
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["batch_number"], "B-300");
        assert_eq!(body["status"], "в производстве");
        assert_eq!(body["production_date"], "2024-01-01");
    }

    #[test]
    fn batch_deserializes_with_nested_product_type() {
        let json = r#"{
            "id": 7,
            "batch_number": "B-201",
            "product_type_id": 1,
            "product_type": {"id": 1, "type_code": "ST3", "type_name": "Сталь 3"},
            "production_date": "2024-03-15",
            "furnace_number": null,
            "total_weight_kg": 1250.5,
            "total_length_m": null,
            "status": "произведено",
            "quality_rating": 4
        }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.product_type_name(), "Сталь 3");
        assert_eq!(batch.status, BatchStatus::Produced);
        assert_eq!(batch.quality_rating, Some(4));
    }

    #[test]
    fn missing_product_type_displays_placeholder() {
        let json = r#"{
            "id": 8,
            "batch_number": "B-202",
            "product_type_id": 2,
            "product_type": null,
            "production_date": "2024-03-16",
            "furnace_number": "П-1",
            "total_weight_kg": null,
            "total_length_m": null,
            "status": "в производстве",
            "quality_rating": null
        }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.product_type_name(), "Не указан");
    }
}
