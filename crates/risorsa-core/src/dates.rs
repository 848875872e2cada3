//! Expiry date formatting for the `ExpireDate` column.

use chrono::{Days, NaiveDate};

const DATE_SEPARATORS: [char; 2] = ['-', '/'];

/// Output layout expected by the directory import.
pub const EXPIRE_DATE_FORMAT: &str = "%m/%d/%Y 00:00";

/// Converts a `dd-mm-yyyy` or `dd/mm/yyyy` end date into the import layout.
///
/// The account expires at the start of the following day, so one day is
/// added. Input that does not parse is returned unchanged.
pub fn format_expire_date(raw: &str) -> String {
    let trimmed = raw.trim();
    DATE_SEPARATORS
        .iter()
        .find_map(|sep| parse_day_month_year(trimmed, *sep))
        .and_then(|date| date.checked_add_days(Days::new(1)))
        .map_or_else(
            || trimmed.to_string(),
            |date| date.format(EXPIRE_DATE_FORMAT).to_string(),
        )
}

fn parse_day_month_year(raw: &str, sep: char) -> Option<NaiveDate> {
    let mut parts = raw.split(sep);
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_one_day() {
        assert_eq!(format_expire_date("31-12-2025"), "01/01/2026 00:00");
        assert_eq!(format_expire_date("28/02/2024"), "02/29/2024 00:00");
        assert_eq!(format_expire_date(" 5-3-2026 "), "03/06/2026 00:00");
    }

    #[test]
    fn passes_through_unparsed_input() {
        assert_eq!(format_expire_date(""), "");
        assert_eq!(format_expire_date("fine progetto"), "fine progetto");
        assert_eq!(format_expire_date("31-02-2025"), "31-02-2025");
        assert_eq!(format_expire_date("2025-12-31"), "2025-12-31");
    }
}
