use crate::utils::formatting::{PLACEHOLDER, format_clock, format_distance, title_case_code};
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// Summary of one calendar day. Always derived from the day's segments,
/// never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayStatistics {
    pub segments: usize,
    pub visits: usize,
    pub activities: usize,
    pub total_distance_m: f64,
    /// Earliest start and latest end, as local wall-clock times.
    pub span: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Distinct raw category codes (`IN_PASSENGER_VEHICLE`, ...).
    pub activity_types: BTreeSet<String>,
}

impl DayStatistics {
    pub fn distance_label(&self) -> String {
        format_distance(self.total_distance_m)
    }

    pub fn time_range_label(&self) -> String {
        match &self.span {
            Some((first, last)) => format!("{} - {}", format_clock(first), format_clock(last)),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn activity_types_label(&self) -> String {
        let labels: BTreeSet<String> = self
            .activity_types
            .iter()
            .map(|code| title_case_code(code))
            .collect();

        if labels.is_empty() {
            return PLACEHOLDER.to_string();
        }

        labels.into_iter().collect::<Vec<_>>().join(", ")
    }
}
