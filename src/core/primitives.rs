use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses a series label into a naive timestamp.
///
/// Accepts plain dates (`2022-06-10`) as midnight, plus minute and second
/// precision date-times with either a space or `T` separator.
#[must_use]
pub fn parse_timestamp(label: &str) -> Option<NaiveDateTime> {
    let label = label.trim();
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(label, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
