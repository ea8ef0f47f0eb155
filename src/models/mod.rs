pub mod calendar;
pub mod date_key;
pub mod day_stats;
pub mod record;

pub use calendar::{CalendarCell, MonthGrid, WeekStart, YearMonth};
pub use date_key::DateKey;
pub use day_stats::DayStatistics;
pub use record::{Activity, PathPoint, Record, TimelineDocument, TopCandidate};
