use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use crate::errors::AppError;

/// Nothing before this day is ever offered.
pub fn historical_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A day can be picked only if it starts no earlier than `now` and is not
/// before the historical floor. Past midnight that rules out today.
pub fn is_selectable(date: NaiveDate, now: NaiveDateTime) -> bool {
    date >= historical_floor() && date.and_time(NaiveTime::default()) >= now
}

pub fn first_selectable(now: NaiveDateTime) -> NaiveDate {
    let day = if now.time() == NaiveTime::default() {
        now.date()
    } else {
        now.date() + Duration::days(1)
    };
    day.max(historical_floor())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let invalid = || AppError::BadRequest(format!("invalid month: {s}"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let digits =
            |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(year, 4) || !digits(month, 2) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Days of the month in order. Stops at the last representable date.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month;
        std::iter::successors(Some(self.first_day()), NaiveDate::succ_opt)
            .take_while(move |d| d.month() == month)
    }

    pub fn days(&self) -> u32 {
        self.dates().count() as u32
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub selectable: bool,
}

/// One month laid out in weeks; `None` pads the first and last week.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub month: YearMonth,
    pub prev: YearMonth,
    pub next: YearMonth,
    #[serde(skip)]
    pub week_start: Weekday,
    #[serde(skip)]
    pub now: NaiveDateTime,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl MonthView {
    pub fn build(month: YearMonth, now: NaiveDateTime, week_start: Weekday) -> Self {
        let first = month.first_day();
        let lead = (first.weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7;

        let mut weeks = Vec::new();
        let mut week: [Option<CalendarDay>; 7] = [None; 7];
        let mut column = lead as usize;

        for date in month.dates() {
            week[column] = Some(CalendarDay {
                date,
                selectable: is_selectable(date, now),
            });
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Self {
            month,
            prev: month.prev(),
            next: month.next(),
            week_start,
            now,
            weeks,
        }
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        is_selectable(date, self.now)
    }

    /// Column headers, starting from `week_start`.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.week_start; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten().flatten()
    }
}
