use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut next = NaiveDate::from_ymd_opt(year, month, 1);

    while let Some(d) = next {
        if d.month() != month {
            break;
        }
        out.push(d);
        next = d.succ_opt();
    }

    out
}

/// Inclusive list of days from `start` to `end`; empty when `end < start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut next = Some(start);

    while let Some(d) = next {
        if d > end {
            break;
        }
        out.push(d);
        next = d.succ_opt();
    }

    out
}
