use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Перечисления результата контроля
// ============================================================================

/// Итоговый вердикт проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionVerdict {
    #[serde(rename = "соответствует")]
    Pass,
    #[serde(rename = "условно соответствует")]
    ConditionalPass,
    #[serde(rename = "не соответствует")]
    Fail,
}

impl InspectionVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionVerdict::Pass => "соответствует",
            InspectionVerdict::ConditionalPass => "условно соответствует",
            InspectionVerdict::Fail => "не соответствует",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            InspectionVerdict::Pass => "verdict-pass",
            InspectionVerdict::ConditionalPass => "verdict-warning",
            InspectionVerdict::Fail => "verdict-fail",
        }
    }
}

impl fmt::Display for InspectionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Статус обработки результата контроля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionStatus {
    #[serde(rename = "обработка")]
    Processing,
    #[serde(rename = "проверено")]
    Checked,
    #[serde(rename = "утверждено")]
    Approved,
}

impl InspectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionStatus::Processing => "обработка",
            InspectionStatus::Checked => "проверено",
            InspectionStatus::Approved => "утверждено",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            InspectionStatus::Processing => "status-processing",
            InspectionStatus::Checked => "status-checked",
            InspectionStatus::Approved => "status-approved",
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Результат контроля
// ============================================================================

/// Денормализованная ссылка на партию внутри результата контроля.
/// Бэкенд вкладывает партию целиком, лишние поля игнорируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRef {
    pub id: i64,
    pub batch_number: String,
}

/// Результат контроля качества. На этой поверхности только для чтения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: i64,
    pub batch_id: i64,
    pub batch: Option<BatchRef>,
    pub inspection_time: NaiveDateTime,
    pub overall_verdict: InspectionVerdict,
    pub status: InspectionStatus,
    #[serde(default)]
    pub defect_count: u32,
    #[serde(default)]
    pub is_defect_detected: bool,
}

impl Inspection {
    /// Номер партии для отображения в таблице
    pub fn batch_number(&self) -> String {
        self.batch
            .as_ref()
            .map(|b| b.batch_number.clone())
            .unwrap_or_else(|| "Не указана".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_wire_format() {
        let parsed: InspectionVerdict =
            serde_json::from_str("\"условно соответствует\"").unwrap();
        assert_eq!(parsed, InspectionVerdict::ConditionalPass);
        assert_eq!(parsed.css_class(), "verdict-warning");

        let json = serde_json::to_string(&InspectionVerdict::Fail).unwrap();
        assert_eq!(json, "\"не соответствует\"");
    }

    #[test]
    fn inspection_deserializes_from_backend_shape() {
        // Ответ бэкенда содержит больше полей, чем нужно этой поверхности
        let json = r#"{
            "id": 11,
            "batch_id": 7,
            "batch": {"id": 7, "batch_number": "B-201", "product_type_id": 1, "status": "произведено"},
            "inspection_time": "2024-03-15T14:02:26.123456",
            "overall_verdict": "соответствует",
            "status": "утверждено",
            "defect_count": 2,
            "is_defect_detected": true,
            "measurement_data": {"thickness": 2.5},
            "notes": null
        }"#;
        let inspection: Inspection = serde_json::from_str(json).unwrap();
        assert_eq!(inspection.batch_number(), "B-201");
        assert_eq!(inspection.defect_count, 2);
        assert!(inspection.is_defect_detected);
        assert_eq!(inspection.status, InspectionStatus::Approved);
    }

    #[test]
    fn missing_batch_displays_placeholder() {
        let json = r#"{
            "id": 12,
            "batch_id": 9,
            "batch": null,
            "inspection_time": "2024-03-15T10:00:00",
            "overall_verdict": "не соответствует",
            "status": "обработка",
            "defect_count": 0,
            "is_defect_detected": false
        }"#;
        let inspection: Inspection = serde_json::from_str(json).unwrap();
        assert_eq!(inspection.batch_number(), "Не указана");
    }
}
