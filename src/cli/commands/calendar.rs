use crate::cli::commands::open_session;
use crate::cli::commands::show::print_statistics;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{CalendarCell, DateKey, MonthGrid, YearMonth};
use crate::utils::colors::{RESET, color_for_day};
use crate::utils::formatting::{bold, pad_left};

/// Width of one calendar column.
const CELL: usize = 5;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        file,
        month,
        select,
    } = cmd
    {
        let mut session = open_session(file, cfg)?;

        // La selezione sposta il calendario sul mese del giorno scelto
        let selected = match select {
            Some(d) => {
                let key = DateKey::parse(d)?;
                Some((key, session.select_date(key)?))
            }
            None => None,
        };

        if let Some(m) = month {
            session.set_month(YearMonth::parse(m)?);
        }

        let grid = session.month_grid();
        print!("{}", render_grid(&grid));
        println!(
            "\n{} day(s) with data in {}",
            grid.days_with_data(),
            grid.title()
        );

        if let Some((key, stats)) = selected {
            println!();
            print_statistics(&key, &stats);
        }
    }
    Ok(())
}

/// Text rendering of the month: days with data carry a `*`, the selected
/// day is wrapped in brackets.
pub(crate) fn render_grid(grid: &MonthGrid) -> String {
    let mut out = String::new();
    let width = CELL * 7;

    let title = grid.title();
    let pad = width.saturating_sub(title.len()) / 2;
    out.push_str(&format!("{}{}\n", " ".repeat(pad), bold(&title)));

    for h in grid.headers() {
        out.push_str(&pad_left(h, CELL - 1));
        out.push(' ');
    }
    out.push('\n');

    for week in grid.weeks() {
        let mut line = String::new();
        for slot in week {
            match slot {
                Some(cell) => line.push_str(&render_cell(cell)),
                None => line.push_str(&" ".repeat(CELL)),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn render_cell(cell: &CalendarCell) -> String {
    let color = color_for_day(cell.has_data, cell.selected);
    let text = if cell.selected {
        format!("[{:>2}]", cell.day)
    } else if cell.has_data {
        format!("{:>3}*", cell.day)
    } else {
        format!("{:>3} ", cell.day)
    };
    format!("{color}{text}{RESET} ")
}
