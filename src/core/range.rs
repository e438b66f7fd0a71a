//! Inclusive date ranges used by the grid view and the exports.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date, month_last_day, parse_date};
use crate::utils::time::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Anything that sits at a point of the calendar.
pub trait CalendarPoint {
    fn at(&self) -> NaiveDateTime;
}

impl CalendarPoint for NaiveDateTime {
    fn at(&self) -> NaiveDateTime {
        *self
    }
}

impl CalendarPoint for NaiveDate {
    fn at(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

/// `[start of first day, last instant of last day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    /// Build a range from two bounds; the time of day of each bound is
    /// discarded so both boundary days are fully included.
    pub fn new(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> AppResult<Self> {
        let (Some(from), Some(to)) = (from, to) else {
            return Err(AppError::InvalidRange(
                "Please select both \"from\" and \"to\" dates.".into(),
            ));
        };

        let start = from.date().and_time(NaiveTime::MIN);
        let end = to.date().and_time(end_of_day()?);

        if start > end {
            return Err(AppError::InvalidRange(format!(
                "\"from\" date {} is after \"to\" date {}.",
                format_date(&from.date()),
                format_date(&to.date())
            )));
        }

        Ok(Self { start, end })
    }

    /// Same as `new`, from raw user input (`YYYY-MM-DD`, `M/D/YYYY`, optionally
    /// followed by a time). An unreadable bound is reported as `InvalidRange`.
    pub fn from_input(from: Option<&str>, to: Option<&str>) -> AppResult<Self> {
        let from_at = match from {
            Some(s) => Some(parse_bound(s).ok_or_else(|| {
                AppError::InvalidRange(format!("cannot read \"from\" date '{s}'."))
            })?),
            None => None,
        };
        let to_at = match to {
            Some(s) => Some(parse_bound(s).ok_or_else(|| {
                AppError::InvalidRange(format!("cannot read \"to\" date '{s}'."))
            })?),
            None => None,
        };
        Self::new(from_at, to_at)
    }

    /// Parse a compact range expression:
    ///
    /// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    /// - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
    pub fn parse_expr(r: &str) -> AppResult<Self> {
        let (start_raw, end_raw) = match r.split_once(':') {
            Some((s, e)) => (s.trim(), e.trim()),
            None => (r.trim(), r.trim()),
        };

        if start_raw.len() != end_raw.len() {
            return Err(AppError::InvalidRange(
                "start and end must have same format".into(),
            ));
        }

        let (first, _) = expr_bounds(start_raw)?;
        let (_, last) = expr_bounds(end_raw)?;

        Self::new(Some(first.at()), Some(last.at()))
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains<P: CalendarPoint>(&self, p: &P) -> bool {
        let at = p.at();
        self.start <= at && at <= self.end
    }

    pub fn filter<P: CalendarPoint + Copy>(&self, all: &[P]) -> Vec<P> {
        all.iter().copied().filter(|d| self.contains(d)).collect()
    }
}

/// Keep the points of `all` that fall between `from` and `to` (both days
/// inclusive). Any problem with the bounds yields `InvalidRange` and no
/// dates at all.
pub fn filter_dates<P: CalendarPoint + Copy>(
    all: &[P],
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
) -> AppResult<Vec<P>> {
    let range = DateRange::new(from, to)?;
    Ok(range.filter(all))
}

fn parse_bound(s: &str) -> Option<NaiveDateTime> {
    parse_timestamp(s).or_else(|| parse_date(s).map(|d| d.at()))
}

fn end_of_day() -> AppResult<NaiveTime> {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
        .ok_or_else(|| AppError::InvalidRange("invalid end of day".into()))
}

/// First and last day covered by a single `YYYY` / `YYYY-MM` / `YYYY-MM-DD`.
fn expr_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(format!("unsupported range format: '{p}'"));

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p.get(0..4).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
            let m: u32 = p.get(5..7).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
