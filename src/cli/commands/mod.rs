pub mod calendar;
pub mod config;
pub mod days;
pub mod export;
pub mod init;
pub mod show;

use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::models::YearMonth;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::Local;

/// Load `file` into a fresh session on the host's local calendar.
pub(crate) fn open_session(file: &str, cfg: &Config) -> AppResult<Session<Local>> {
    let mut session = Session::new(Local, YearMonth::of(date::today()), cfg.week_start);

    let skipped = session
        .load_file(&expand_tilde(file), cfg.record_policy())?
        .skipped();

    if skipped > 0 {
        warning(format!("{skipped} invalid record(s) skipped"));
    }

    Ok(session)
}
