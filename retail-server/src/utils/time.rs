//! Date helpers for report periods
//!
//! Dates are calendar days in UTC. Repositories only see `i64` Unix millis;
//! a period is `[start, end)` with `end` at the next day's midnight.

use chrono::{DateTime, NaiveDate, NaiveTime};

use super::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")).with_detail("date", date))
}

/// Parse an optional date query parameter; blank counts as absent
pub fn parse_optional_date(date: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match date.map(str::trim) {
        None | Some("") => Ok(None),
        Some(d) => parse_date(d).map(Some),
    }
}

/// 00:00:00 of `date` as Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Next day's 00:00:00 as Unix millis; callers compare with `< end`
pub fn day_end_millis(date: NaiveDate) -> i64 {
    match date.succ_opt() {
        Some(next) => day_start_millis(next),
        None => i64::MAX,
    }
}

/// Calendar day (UTC) of a Unix millis timestamp
pub fn date_of_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// Millis bounds of an inclusive date period; either side may be open
pub fn period_millis(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> AppResult<(Option<i64>, Option<i64>)> {
    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        return Err(AppError::validation(format!("Period start {from} is after its end {to}"))
            .with_detail("from", from.to_string())
            .with_detail("to", to.to_string()));
    }
    Ok((from.map(day_start_millis), to.map(day_end_millis)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(date("2025-08-22"), NaiveDate::from_ymd_opt(2025, 8, 22).unwrap());
        let err = parse_date("22/08/2025").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert_eq!(parse_optional_date(None).unwrap(), None);
    }

    #[test]
    fn test_day_bounds_cover_one_day() {
        let d = date("2025-08-22");
        assert_eq!(day_start_millis(d), 1_755_820_800_000);
        assert_eq!(day_end_millis(d) - day_start_millis(d), 86_400_000);
        assert_eq!(date_of_millis(day_start_millis(d)), Some(d));
        assert_eq!(date_of_millis(day_end_millis(d) - 1), Some(d));
    }

    #[test]
    fn test_period_bounds() {
        let (start, end) = period_millis(Some(date("2025-08-01")), Some(date("2025-08-31"))).unwrap();
        assert_eq!(start, Some(day_start_millis(date("2025-08-01"))));
        assert_eq!(end, Some(day_start_millis(date("2025-09-01"))));

        assert_eq!(period_millis(None, None).unwrap(), (None, None));

        let err = period_millis(Some(date("2025-09-01")), Some(date("2025-08-01"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
