//! Агрегаты дашборда.
//!
//! Чистые функции над текущими снимками списков: ни DOM, ни часов.
//! "Сегодня" передаётся параметром, поэтому всё проверяется на хосте.

use chrono::NaiveDate;
use contracts::domain::batch::Batch;
use contracts::domain::inspection::Inspection;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_batches: usize,
    pub inspections_today: usize,
    pub total_defects: u64,
    /// Доля проверок с дефектами, в процентах с одним знаком после запятой.
    /// Ровно 0.0 при пустом списке проверок.
    pub defect_rate_percent: f64,
}

pub fn compute_metrics(
    batches: &[Batch],
    inspections: &[Inspection],
    today: NaiveDate,
) -> DashboardMetrics {
    let inspections_today = inspections
        .iter()
        .filter(|i| i.inspection_time.date() == today)
        .count();

    let total_defects = inspections.iter().map(|i| u64::from(i.defect_count)).sum();

    let defect_rate_percent = if inspections.is_empty() {
        0.0
    } else {
        let flagged = inspections.iter().filter(|i| i.is_defect_detected).count();
        (flagged as f64 / inspections.len() as f64 * 1000.0).round() / 10.0
    };

    DashboardMetrics {
        total_batches: batches.len(),
        inspections_today,
        total_defects,
        defect_rate_percent,
    }
}

/// Лента последних проверок: сортировка по времени по убыванию,
/// не больше `limit` записей
pub fn recent_inspections(inspections: &[Inspection], limit: usize) -> Vec<Inspection> {
    let mut sorted = inspections.to_vec();
    sorted.sort_by(|a, b| b.inspection_time.cmp(&a.inspection_time));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use contracts::domain::inspection::{InspectionStatus, InspectionVerdict};

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn inspection(id: i64, time: &str, defects: u32, flagged: bool) -> Inspection {
        Inspection {
            id,
            batch_id: 1,
            batch: None,
            inspection_time: dt(time),
            overall_verdict: if flagged {
                InspectionVerdict::Fail
            } else {
                InspectionVerdict::Pass
            },
            status: InspectionStatus::Checked,
            defect_count: defects,
            is_defect_detected: flagged,
        }
    }

    #[test]
    fn empty_lists_give_zero_metrics() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let m = compute_metrics(&[], &[], today);
        assert_eq!(m.total_batches, 0);
        assert_eq!(m.inspections_today, 0);
        assert_eq!(m.total_defects, 0);
        assert_eq!(m.defect_rate_percent, 0.0);
    }

    #[test]
    fn counts_only_todays_inspections() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let inspections = vec![
            inspection(1, "2024-03-15T08:00:00", 0, false),
            inspection(2, "2024-03-15T23:59:59", 1, true),
            inspection(3, "2024-03-14T12:00:00", 2, true),
        ];
        let m = compute_metrics(&[], &inspections, today);
        assert_eq!(m.inspections_today, 2);
        assert_eq!(m.total_defects, 3);
    }

    #[test]
    fn defect_rate_rounded_to_one_decimal_and_bounded() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        // 1 из 3 с дефектами: 33.333... -> 33.3
        let inspections = vec![
            inspection(1, "2024-03-15T08:00:00", 1, true),
            inspection(2, "2024-03-15T09:00:00", 0, false),
            inspection(3, "2024-03-15T10:00:00", 0, false),
        ];
        let m = compute_metrics(&[], &inspections, today);
        assert_eq!(m.defect_rate_percent, 33.3);

        // все с дефектами: ровно 100, не больше
        let all_flagged = vec![
            inspection(1, "2024-03-15T08:00:00", 1, true),
            inspection(2, "2024-03-15T09:00:00", 2, true),
        ];
        let m = compute_metrics(&[], &all_flagged, today);
        assert_eq!(m.defect_rate_percent, 100.0);
        assert!(m.defect_rate_percent >= 0.0 && m.defect_rate_percent <= 100.0);
    }

    #[test]
    fn recent_feed_is_sorted_descending_and_truncated() {
        let inspections = vec![
            inspection(1, "2024-03-10T08:00:00", 0, false),
            inspection(2, "2024-03-15T09:00:00", 0, true),
            inspection(3, "2024-03-12T10:00:00", 0, false),
            inspection(4, "2024-03-14T11:00:00", 0, true),
            inspection(5, "2024-03-11T12:00:00", 0, false),
            inspection(6, "2024-03-13T13:00:00", 0, true),
        ];

        let feed = recent_inspections(&inspections, 5);
        assert_eq!(feed.len(), 5);
        assert!(feed
            .windows(2)
            .all(|w| w[0].inspection_time >= w[1].inspection_time));
        assert_eq!(feed[0].id, 2);
        // самая старая запись не попала в ленту
        assert!(feed.iter().all(|i| i.id != 1));
    }

    #[test]
    fn recent_feed_shorter_than_limit_keeps_all() {
        let inspections = vec![
            inspection(1, "2024-03-10T08:00:00", 0, false),
            inspection(2, "2024-03-15T09:00:00", 0, true),
        ];
        assert_eq!(recent_inspections(&inspections, 5).len(), 2);
        assert_eq!(recent_inspections(&[], 5).len(), 0);
    }
}
