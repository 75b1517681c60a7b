use contracts::domain::batch::{Batch, BatchStatus};

/// Чистые производные от кэшированного списка партий.
/// Кэш не изменяется, на бэкенд ничего не отправляется.

/// Точное совпадение статуса; `None` возвращает список без изменений
pub fn filter_by_status(items: &[Batch], status: Option<BatchStatus>) -> Vec<Batch> {
    match status {
        None => items.to_vec(),
        Some(s) => items.iter().filter(|b| b.status == s).cloned().collect(),
    }
}

/// Поиск по подстроке номера партии без учёта регистра,
/// исходный порядок сохраняется
pub fn search_by_number(items: &[Batch], query: &str) -> Vec<Batch> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|b| b.batch_number.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Оценка качества в виде звёзд: ★★★☆☆; пусто, если оценки нет
pub fn quality_stars(rating: Option<u8>) -> String {
    match rating {
        None => String::new(),
        Some(r) => (0..5).map(|i| if i < r { '★' } else { '☆' }).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn batch(id: i64, number: &str, status: BatchStatus) -> Batch {
        Batch {
            id,
            batch_number: number.to_string(),
            product_type_id: 1,
            product_type: None,
            production_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            furnace_number: None,
            total_weight_kg: None,
            total_length_m: None,
            status,
            quality_rating: None,
        }
    }

    #[test]
    fn filter_returns_exact_status_subset() {
        let items = vec![
            batch(1, "B-201", BatchStatus::InProduction),
            batch(2, "A-100", BatchStatus::Shipped),
            batch(3, "B-250", BatchStatus::InProduction),
        ];

        let filtered = filter_by_status(&items, Some(BatchStatus::InProduction));
        assert_eq!(
            filtered.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 3]
        );

        assert!(filter_by_status(&items, Some(BatchStatus::Produced)).is_empty());
    }

    #[test]
    fn empty_status_is_identity() {
        let items = vec![
            batch(1, "B-201", BatchStatus::InProduction),
            batch(2, "A-100", BatchStatus::Shipped),
        ];
        assert_eq!(filter_by_status(&items, None), items);
    }

    #[test]
    fn search_matches_substring_in_original_order() {
        let items = vec![
            batch(1, "B-201", BatchStatus::InProduction),
            batch(2, "A-100", BatchStatus::InProduction),
            batch(3, "B-250", BatchStatus::InProduction),
        ];
        let found = search_by_number(&items, "B-2");
        assert_eq!(
            found
                .iter()
                .map(|b| b.batch_number.as_str())
                .collect::<Vec<_>>(),
            vec!["B-201", "B-250"]
        );
    }

    #[test]
    fn search_is_case_insensitive_and_empty_is_identity() {
        let items = vec![
            batch(1, "B-201", BatchStatus::InProduction),
            batch(2, "A-100", BatchStatus::InProduction),
        ];
        assert_eq!(search_by_number(&items, "b-2").len(), 1);
        assert_eq!(search_by_number(&items, "").len(), 2);
        assert_eq!(search_by_number(&items, "  ").len(), 2);
    }

    #[test]
    fn stars_render_rating_out_of_five() {
        assert_eq!(quality_stars(Some(3)), "★★★☆☆");
        assert_eq!(quality_stars(Some(0)), "☆☆☆☆☆");
        assert_eq!(quality_stars(Some(5)), "★★★★★");
        assert_eq!(quality_stars(None), "");
    }
}
