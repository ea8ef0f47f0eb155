//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;

/// Shown wherever a statistic has no value.
pub const PLACEHOLDER: &str = "-";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Distance in metres → `"-"`, `"500 m"` or `"1.50 km"`.
pub fn format_distance(meters: f64) -> String {
    if meters.is_nan() || meters <= 0.0 {
        return PLACEHOLDER.to_string();
    }

    if meters >= 1000.0 {
        format!("{:.2} km", round_half_up(meters / 1000.0, 2))
    } else {
        format!("{:.0} m", round_half_up(meters, 0))
    }
}

/// Round to `decimals` places with ties going up (`1.125` → `1.13`).
///
/// `format!` alone rounds exact ties to even.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// `IN_PASSENGER_VEHICLE` → `In Passenger Vehicle`.
pub fn title_case_code(code: &str) -> String {
    code.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 12-hour clock, e.g. `08:05 AM`.
pub fn format_clock(t: &NaiveDateTime) -> String {
    t.format("%I:%M %p").to_string()
}
