// src/export/logic.rs

use crate::chart::{ChartRenderer, FL_BAR_FILE, LOCATIONS_FILE};
use crate::errors::AppResult;
use crate::export::{BOOKLET_MIME, ExportFormat};
use crate::export::booklet::{BookletMeta, build_booklet_with};
use crate::export::fs_utils::{ensure_writable, write_bytes};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::notify_export_success;
use crate::models::SiteTable;
use crate::ui::messages::info;
use std::path::{Path, PathBuf};

/// High-level export operations used by the CLI handlers.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the normalized table (derived columns included).
    pub fn export_table(
        table: &SiteTable,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(table, path),
            ExportFormat::Json => export_json(table, path),
        }
    }

    /// Render both overview charts into `dir` and return the written paths.
    pub fn write_charts(
        table: &SiteTable,
        renderer: &ChartRenderer,
        dir: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let bar_path = dir.join(FL_BAR_FILE);
        let loc_path = dir.join(LOCATIONS_FILE);
        ensure_writable(&bar_path, force)?;
        ensure_writable(&loc_path, force)?;

        info(format!("Rendering charts at {} DPI", renderer.dpi()));

        let bar = renderer.fl_bar(table)?;
        write_bytes(&bar_path, &bar.png)?;
        notify_export_success("FL bar chart", &bar_path);

        let loc = renderer.location_scatter(table)?;
        write_bytes(&loc_path, &loc.png)?;
        notify_export_success("Location chart", &loc_path);

        Ok(vec![bar_path, loc_path])
    }

    /// Assemble the booklet and write it to `path` as a whole.
    /// Returns the number of bytes written.
    pub fn write_booklet(
        table: &SiteTable,
        meta: &BookletMeta,
        renderer: &ChartRenderer,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        info(format!(
            "Building booklet for {} site(s): {}",
            table.len(),
            path.display()
        ));

        let booklet = build_booklet_with(table, meta, renderer)?;
        write_bytes(path, &booklet.bytes)?;

        info(format!(
            "{} page(s), {} bytes written ({BOOKLET_MIME})",
            booklet.page_count,
            booklet.bytes.len()
        ));
        notify_export_success("PDF", path);
        Ok(booklet.bytes.len())
    }
}
