// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, site_to_row, table_to_exports};
use crate::export::notify_export_success;
use crate::models::SiteTable;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(table: &SiteTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&table_to_exports(table))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the same header layout the intake reads back.
/// Derived columns are included and ignored on re-import.
pub(crate) fn export_csv(table: &SiteTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers(table.has_coordinates()))?;
    for rec in table.records() {
        wtr.write_record(site_to_row(rec, table.has_coordinates()))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
