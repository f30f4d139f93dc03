/// Utilities for date and time formatting
///
/// Timestamps from the catalog API are shown as DD.MM.YYYY HH:MM:SS
use chrono::{DateTime, Utc};

/// Format a timestamp, or "-" when the API did not send one
/// Example: 2024-03-15T14:02:26.123Z -> "15.03.2024 14:02:26"
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let dt = DateTime::parse_from_rfc3339("2024-03-15T14:02:26.123Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(Some(dt)), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_timestamp(None), "-");
    }
}
