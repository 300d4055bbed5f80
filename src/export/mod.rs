// src/export/mod.rs

pub mod booklet;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod metrics;
mod model;
pub mod pdf;

pub use booklet::{Booklet, BookletMeta, build_booklet, build_booklet_with, toc_lines};
pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Default file name of the generated booklet.
pub const BOOKLET_FILE_NAME: &str = "Liquefaction_Report_Booklet.pdf";
/// MIME type of the generated booklet.
pub const BOOKLET_MIME: &str = "application/pdf";

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
