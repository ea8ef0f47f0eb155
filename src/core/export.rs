use crate::config::Config;
use crate::core::logic::Core;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, SegmentExport, ensure_writable, export_csv, export_json};
use chrono::TimeZone;
use std::fs;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Export del giorno selezionato.
    ///
    /// - `format`: json (same document shape as the input) | csv
    /// - `out`: explicit destination; defaults to
    ///   `<output_dir>/<export_prefix><DateKey>.<ext>`
    /// - `force`: overwrite without asking
    pub fn export<Tz: TimeZone>(
        session: &Session<Tz>,
        format: ExportFormat,
        out: Option<&str>,
        cfg: &Config,
        force: bool,
    ) -> AppResult<PathBuf> {
        let key = session.selected().ok_or(AppError::NoDateSelected)?;
        let index = session
            .index()
            .ok_or_else(|| AppError::NoRecordsForDate(key.to_string()))?;

        // Nothing is written for an empty day
        let segments = Core::day(&key, index)?;

        let path = match out {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => cfg
                .output_dir()
                .join(Core::export_file_name(&cfg.export_prefix, &key, format.extension())),
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Json => {
                let document = session.export_selected(cfg.pretty_json)?;
                export_json(&document, &path)?;
            }
            ExportFormat::Csv => {
                let rows: Vec<SegmentExport> = segments
                    .iter()
                    .map(|s| SegmentExport::from_record(&key, s))
                    .collect();
                export_csv(&rows, &path)?;
            }
        }

        Ok(path)
    }
}
