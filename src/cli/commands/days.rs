use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days { file } = cmd {
        let session = open_session(file, cfg)?;
        let Some(index) = session.index() else {
            return Ok(());
        };

        if index.is_empty() {
            info("No records found in the export.");
            return Ok(());
        }

        header(format!(
            "{}: {} days, {} records",
            session.source().unwrap_or(file),
            index.len(),
            index.record_count()
        ));

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Day"),
            Column::right("Segments"),
            Column::right("Visits"),
            Column::right("Activities"),
            Column::right("Distance"),
            Column::left("Time range"),
        ]);

        for (key, segments) in index.iter() {
            let stats = aggregate(segments, session.tz())?;
            table.add_row(vec![
                key.to_string(),
                key.date().format("%a").to_string(),
                stats.segments.to_string(),
                stats.visits.to_string(),
                stats.activities.to_string(),
                stats.distance_label(),
                stats.time_range_label(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
