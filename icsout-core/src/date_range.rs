//! Date range for filtering events.

use chrono::NaiveDate;

use crate::date::to_sortable;
use crate::error::{IcsoutError, IcsoutResult};

/// Inclusive range of days, stored as sortable `YYYYMMDD` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: i64,
    pub to: i64,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: to_sortable(from),
            to: to_sortable(to),
        }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Parse the `--start`/`--end` pair given on the command line.
    pub fn from_args(from: &str, to: &str) -> IcsoutResult<Self> {
        Ok(Self::new(parse_cli_date(from)?, parse_cli_date(to)?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let day = to_sortable(date);
        self.from <= day && day <= self.to
    }
}

/// Parse `yyyy/mm/dd` or `YYYY-MM-DD`.
///
/// Month and day may omit their leading zero (`2021/3/6`).
pub fn parse_cli_date(s: &str) -> IcsoutResult<NaiveDate> {
    let s = s.trim();
    ["%Y/%m/%d", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| IcsoutError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_is_inclusive() {
        let range = DateRange::new(ymd(2021, 2, 1), ymd(2021, 2, 28));
        assert!(range.contains(ymd(2021, 2, 1)));
        assert!(range.contains(ymd(2021, 2, 14)));
        assert!(range.contains(ymd(2021, 2, 28)));
        assert!(!range.contains(ymd(2021, 1, 31)));
        assert!(!range.contains(ymd(2021, 3, 1)));
    }

    #[test]
    fn single_day_range() {
        let range = DateRange::single_day(ymd(2021, 3, 6));
        assert!(range.contains(ymd(2021, 3, 6)));
        assert!(!range.contains(ymd(2021, 3, 7)));
    }

    #[test]
    fn parses_both_date_formats() {
        assert_eq!(parse_cli_date("2021/03/06").unwrap(), ymd(2021, 3, 6));
        assert_eq!(parse_cli_date("2021/3/6").unwrap(), ymd(2021, 3, 6));
        assert_eq!(parse_cli_date("2021-03-06").unwrap(), ymd(2021, 3, 6));
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(matches!(
            parse_cli_date("2021/02/30"),
            Err(IcsoutError::InvalidDate(_))
        ));
        assert!(parse_cli_date("tomorrow").is_err());
        assert!(DateRange::from_args("2021/01/01", "soon").is_err());
    }

    #[test]
    fn from_args_builds_sortable_bounds() {
        let range = DateRange::from_args("2021/01/01", "2021-12-31").unwrap();
        assert_eq!(range.from, 20210101);
        assert_eq!(range.to, 20211231);
    }
}
