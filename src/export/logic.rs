// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::models::Entry;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Ask on `output` whether the existing `path` may be replaced; anything but
/// `y`/`yes` cancels the export.
pub(crate) fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    mut input: R,
    mut output: W,
) -> AppResult<()> {
    write!(output, "The file '{}' already exists. Overwrite? [y/N]: ", path.display())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(format!(
            "cancelled, {} left untouched",
            path.display()
        ))),
    }
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `entries` (already in timestamp order) to an absolute `file`.
    pub fn export(
        entries: &[Entry],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if path.exists() && !force {
            confirm_overwrite(path, io::stdin().lock(), io::stdout())?;
        }

        if entries.is_empty() {
            warning("No entries found in the ledger.");
            return Ok(());
        }

        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
