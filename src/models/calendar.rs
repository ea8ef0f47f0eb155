use crate::errors::{AppError, AppResult};
use crate::models::DateKey;
use crate::utils::date::all_days_of_month;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month/year displayed by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        let (y, m) = s
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;

        if y.len() != 4 || m.len() != 2 {
            return Err(AppError::InvalidMonth(s.to_string()));
        }

        let year: i32 = y.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        let month: u32 = m.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Self::new(year, month).map_err(|_| AppError::InvalidMonth(s.to_string()))
    }

    /// Move by `delta` months, wrapping the year in both directions.
    pub fn shift(self, delta: i32) -> Self {
        let zero_based = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: zero_based.div_euclid(12),
            month: zero_based.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        all_days_of_month(self.year, self.month)
    }

    /// Calendar title, e.g. `January 2024`.
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn headers(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// Number of blank cells before `first` in a row starting on this day.
    pub fn offset_of(&self, first: NaiveDate) -> usize {
        match self {
            WeekStart::Sunday => first.weekday().num_days_from_sunday() as usize,
            WeekStart::Monday => first.weekday().num_days_from_monday() as usize,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub key: DateKey,
    pub day: u32,
    pub has_data: bool,
    pub selected: bool,
}

/// Display model of one month: leading blanks, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub week_start: WeekStart,
    pub leading_blanks: usize,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        self.month.title()
    }

    pub fn headers(&self) -> [&'static str; 7] {
        self.week_start.headers()
    }

    /// Rows of seven slots; `None` marks a blank slot.
    pub fn weeks(&self) -> Vec<Vec<Option<&CalendarCell>>> {
        let mut slots: Vec<Option<&CalendarCell>> = vec![None; self.leading_blanks];
        slots.extend(self.cells.iter().map(Some));

        while slots.len() % 7 != 0 {
            slots.push(None);
        }

        slots.chunks(7).map(|w| w.to_vec()).collect()
    }

    pub fn days_with_data(&self) -> usize {
        self.cells.iter().filter(|c| c.has_data).count()
    }
}
