use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{DateKey, DayStatistics};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{bold, pad_right};

const LABEL_WIDTH: usize = 16;
const WRAP_WIDTH: usize = 60;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { file, date } = cmd {
        let key = DateKey::parse(date)?;
        let mut session = open_session(file, cfg)?;
        let stats = session.select_date(key)?;

        print_statistics(&key, &stats);
    }
    Ok(())
}

/// Preview block of one day, shared with `calendar --select`.
pub(crate) fn print_statistics(key: &DateKey, stats: &DayStatistics) {
    println!("{}", bold(&key.long_display()));
    println!();

    print_row("Segments", &stats.segments.to_string());
    print_row("Visits", &stats.visits.to_string());
    print_row("Activities", &stats.activities.to_string());
    print_row("Distance", &stats.distance_label());
    print_row("Time range", &stats.time_range_label());

    let label = stats.activity_types_label();
    let types = textwrap::wrap(&label, WRAP_WIDTH);
    let indent = " ".repeat(LABEL_WIDTH);
    for (i, line) in types.iter().enumerate() {
        if i == 0 {
            print_row("Activity types", line);
        } else {
            println!("{indent}{line}");
        }
    }
}

fn print_row(label: &str, value: &str) {
    println!("{}{}", pad_right(&format!("{label}:"), LABEL_WIDTH), colorize_optional(value));
}
