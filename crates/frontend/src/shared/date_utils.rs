/// Format ISO datetime strings the way the operation crews read them:
/// DD/MM/YYYY HH:MM:SS.
/// Example: "2025-03-15T14:02:26.123Z" -> "15/03/2025 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(['.', 'Z', '+'])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}/{}/{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Date-only variant: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15/03/2025".
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2025-03-15T14:02:26.123Z"),
            "15/03/2025 14:02:26"
        );
        assert_eq!(
            format_datetime("2025-12-31T23:59:59Z"),
            "31/12/2025 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15/03/2025");
        assert_eq!(format_date("2025-03-15T14:02:26.123Z"), "15/03/2025");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_datetime("sem data"), "sem data");
        assert_eq!(format_date(""), "");
    }
}
