//! Application state of one browsing session: the loaded index, the month on
//! display and the selected day.

use crate::core::index::{DayIndex, InvalidRecordPolicy};
use crate::core::loader;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarCell, DateKey, DayStatistics, MonthGrid, WeekStart, YearMonth};
use crate::utils::path::has_json_extension;
use chrono::{Datelike, TimeZone};
use log::info;
use std::fs;
use std::path::Path;

pub struct Session<Tz: TimeZone> {
    tz: Tz,
    index: Option<DayIndex>,
    source: Option<String>,
    month: YearMonth,
    selected: Option<DateKey>,
    week_start: WeekStart,
}

impl<Tz: TimeZone> Session<Tz> {
    pub fn new(tz: Tz, month: YearMonth, week_start: WeekStart) -> Self {
        Self {
            tz,
            index: None,
            source: None,
            month,
            selected: None,
            week_start,
        }
    }

    /// Load a document from memory.
    ///
    /// The new index replaces the old one only when the whole rebuild
    /// succeeded; on error the session is left as it was.
    pub fn load_str(
        &mut self,
        source: &str,
        raw: &str,
        policy: InvalidRecordPolicy,
    ) -> AppResult<&DayIndex> {
        let index = loader::load_index(raw, &self.tz, policy)?;

        info!("Loaded '{source}': {} days", index.len());

        self.source = Some(source.to_string());
        self.selected = None;
        let index: &DayIndex = self.index.insert(index);
        Ok(index)
    }

    /// Load a `.json` export from disk.
    pub fn load_file(&mut self, path: &Path, policy: InvalidRecordPolicy) -> AppResult<&DayIndex> {
        if !has_json_extension(path) {
            return Err(AppError::NotJsonFile(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        self.load_str(&name, &raw, policy)
    }

    pub fn tz(&self) -> &Tz {
        &self.tz
    }

    pub fn index(&self) -> Option<&DayIndex> {
        self.index.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn set_month(&mut self, month: YearMonth) {
        self.month = month;
    }

    /// Move the calendar by `delta` months (negative = back).
    pub fn navigate_month(&mut self, delta: i32) -> YearMonth {
        self.month = self.month.shift(delta);
        self.month
    }

    pub fn selected(&self) -> Option<DateKey> {
        self.selected
    }

    /// Select a day that has data and compute its statistics.
    ///
    /// The calendar follows the selection to the selected day's month.
    pub fn select_date(&mut self, key: DateKey) -> AppResult<DayStatistics> {
        let index = self
            .index
            .as_ref()
            .ok_or_else(|| AppError::NoRecordsForDate(key.to_string()))?;

        let stats = Core::aggregate(&key, index, &self.tz)?;

        self.selected = Some(key);
        self.month = YearMonth::of(key.date());
        Ok(stats)
    }

    /// Statistics of the current selection.
    pub fn selected_statistics(&self) -> AppResult<DayStatistics> {
        let (key, index) = self.selection()?;
        Core::aggregate(&key, index, &self.tz)
    }

    /// Serialized one-day document of the current selection.
    pub fn export_selected(&self, pretty: bool) -> AppResult<String> {
        let (key, index) = self.selection()?;
        Core::export_day(&key, index, pretty)
    }

    fn selection(&self) -> AppResult<(DateKey, &DayIndex)> {
        let key = self.selected.ok_or(AppError::NoDateSelected)?;
        let index = self
            .index
            .as_ref()
            .ok_or_else(|| AppError::NoRecordsForDate(key.to_string()))?;
        Ok((key, index))
    }

    /// Display model of the month on screen.
    pub fn month_grid(&self) -> MonthGrid {
        let leading_blanks = self
            .month
            .first_day()
            .map(|d| self.week_start.offset_of(d))
            .unwrap_or(0);

        let cells = self
            .month
            .days()
            .into_iter()
            .map(|d| {
                let key = DateKey::new(d);
                CalendarCell {
                    key,
                    day: d.day(),
                    has_data: self.index.as_ref().is_some_and(|i| i.contains(&key)),
                    selected: self.selected == Some(key),
                }
            })
            .collect();

        MonthGrid {
            month: self.month,
            week_start: self.week_start,
            leading_blanks,
            cells,
        }
    }
}
