/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{NaiveDate, NaiveDateTime};

/// Format date to DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format datetime to DD.MM.YYYY HH:MM:SS
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Текущая дата по ISO-представлению браузерных часов (UTC),
/// как её считает бэкенд в отметках времени проверок
pub fn today() -> Option<NaiveDate> {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    let date_part = iso.split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15.03.2024");
    }

    #[test]
    fn test_format_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_datetime(dt), "31.12.2024 23:59:59");
    }
}
