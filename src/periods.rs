use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::error::{AppError, AppResult};
use crate::types::ReportType;

/// One row slot of a report: the label it is keyed by plus its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub time: String,
    pub date: NaiveDate,
    pub index: usize,
    pub report_type: ReportType,
}

/// Accepts `YYYY-MM-DD` or `YYYY-MM` (taken as the 1st of the month).
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d"))
        .ok()
        .filter(|date| YEARS.contains(&date.year()))
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {}", value)))
}

/// Four-digit years only.
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Number of periods `periods` would yield, without building them.
pub fn period_count(start: NaiveDate, end: NaiveDate, report_type: ReportType) -> usize {
    if start > end {
        return 0;
    }
    let count = match report_type {
        ReportType::Monthly => (end - start).num_days() + 1,
        ReportType::Yearly => {
            let months = |date: NaiveDate| i64::from(date.year()) * 12 + i64::from(date.month0());
            months(end) - months(start) + 1
        }
    };
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Rejects ranges longer than `max_periods` rows.
pub fn check_span(start: NaiveDate, end: NaiveDate, report_type: ReportType, max_periods: usize) -> AppResult<()> {
    let count = period_count(start, end, report_type);
    if count > max_periods {
        return Err(AppError::BadRequest(format!(
            "Range {}..{} spans {} periods, at most {} allowed",
            start, end, count, max_periods
        )));
    }
    Ok(())
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn label(date: NaiveDate, report_type: ReportType) -> String {
    match report_type {
        ReportType::Monthly => date.format("%Y-%m-%d").to_string(),
        ReportType::Yearly => date.format("%Y-%m").to_string(),
    }
}

/// Every day (monthly report) or month (yearly report) in `[start, end]`.
/// Empty when `start` is after `end`.
pub fn periods(start: NaiveDate, end: NaiveDate, report_type: ReportType) -> Vec<Period> {
    if start > end {
        return Vec::new();
    }

    let (mut current, last) = match report_type {
        ReportType::Monthly => (start, end),
        ReportType::Yearly => (first_of_month(start), first_of_month(end)),
    };

    let mut periods = Vec::new();
    while current <= last {
        periods.push(Period {
            time: label(current, report_type),
            date: current,
            index: periods.len(),
            report_type,
        });

        let next = match report_type {
            ReportType::Monthly => current.checked_add_signed(Duration::days(1)),
            ReportType::Yearly => current.checked_add_months(Months::new(1)),
        };
        match next {
            Some(next) => current = next,
            None => break,
        }
    }
    periods
}

/// Range used when a request leaves `startTime`/`endTime` out:
/// the last 7 days for monthly reports, the last 12 months for yearly ones.
pub fn default_range(today: NaiveDate, report_type: ReportType) -> (NaiveDate, NaiveDate) {
    match report_type {
        ReportType::Monthly => (today - Duration::days(7), today),
        ReportType::Yearly => {
            let start = first_of_month(today)
                .checked_sub_months(Months::new(11))
                .unwrap_or(today);
            (start, today)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn three_days_inclusive() {
        let result = periods(date("2024-01-01"), date("2024-01-03"), ReportType::Monthly);
        let labels: Vec<_> = result.iter().map(|p| p.time.as_str()).collect();
        assert_eq!(labels, ["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(result[2].index, 2);
    }

    #[test]
    fn day_count_crosses_leap_february() {
        let result = periods(date("2024-02-27"), date("2024-03-02"), ReportType::Monthly);
        assert_eq!(result.len(), 5);
        assert_eq!(result[2].time, "2024-02-29");
    }

    #[test]
    fn month_count_spans_years() {
        let result = periods(date("2023-11-20"), date("2024-02-03"), ReportType::Yearly);
        let labels: Vec<_> = result.iter().map(|p| p.time.as_str()).collect();
        assert_eq!(labels, ["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(periods(date("2024-01-03"), date("2024-01-01"), ReportType::Monthly).is_empty());
        assert!(periods(date("2024-05-01"), date("2024-01-01"), ReportType::Yearly).is_empty());
    }

    #[test]
    fn single_day_range() {
        assert_eq!(periods(date("2024-06-15"), date("2024-06-15"), ReportType::Monthly).len(), 1);
        assert_eq!(periods(date("2024-06-15"), date("2024-06-15"), ReportType::Yearly).len(), 1);
    }

    #[test]
    fn parses_month_only_dates() {
        assert_eq!(parse_date("2024-07").unwrap(), date("2024-07-01"));
        assert_eq!(parse_date(" 2024-07-09 ").unwrap(), date("2024-07-09"));
        assert!(matches!(parse_date("July"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn five_digit_years_are_rejected() {
        assert!(matches!(parse_date("+99999-12-31"), Err(AppError::BadRequest(_))));
        assert!(parse_date("9999-12-31").is_ok());
    }

    #[test]
    fn period_count_matches_periods() {
        let cases = [
            (date("2024-01-01"), date("2024-01-03"), ReportType::Monthly),
            (date("2024-02-27"), date("2024-03-02"), ReportType::Monthly),
            (date("2023-11-20"), date("2024-02-03"), ReportType::Yearly),
            (date("2024-05-01"), date("2024-01-01"), ReportType::Yearly),
        ];
        for (start, end, report_type) in cases {
            assert_eq!(period_count(start, end, report_type), periods(start, end, report_type).len());
        }
    }

    #[test]
    fn long_spans_are_rejected() {
        let start = date("0001-01-01");
        let end = date("9999-12-31");
        assert_eq!(period_count(start, end, ReportType::Monthly), 3_652_059);
        assert!(matches!(
            check_span(start, end, ReportType::Monthly, 366),
            Err(AppError::BadRequest(_))
        ));
        assert!(check_span(date("2024-01-01"), date("2024-12-31"), ReportType::Monthly, 366).is_ok());
        assert!(check_span(date("2024-01-01"), date("2025-01-01"), ReportType::Monthly, 366).is_err());
        assert!(check_span(start, end, ReportType::Monthly, usize::MAX).is_ok());
    }

    #[test]
    fn default_ranges() {
        let today = date("2025-03-15");
        assert_eq!(default_range(today, ReportType::Monthly), (date("2025-03-08"), today));

        let (start, end) = default_range(today, ReportType::Yearly);
        assert_eq!(start, date("2024-04-01"));
        assert_eq!(periods(start, end, ReportType::Yearly).len(), 12);
    }
}
