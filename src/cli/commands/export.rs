use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::models::DateKey;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        date,
        format,
        out,
        force,
    } = cmd
    {
        let key = DateKey::parse(date)?;
        let mut session = open_session(file, cfg)?;
        session.select_date(key)?;

        ExportLogic::export(&session, *format, out.as_deref(), cfg, *force)?;
    }
    Ok(())
}
