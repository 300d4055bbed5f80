use crate::chart::ChartRenderer;
use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{BookletMeta, ExportLogic};
use crate::utils::date::today_iso;
use crate::utils::path::expand_tilde;

/// Handle the `build` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Build {
        input,
        project,
        author,
        date,
        file,
        force,
        edits,
    } = cmd
    {
        let session = load_session(input, edits)?;

        let meta = BookletMeta {
            project: project.clone().unwrap_or_else(|| cfg.project_name.clone()),
            author: author.clone().unwrap_or_else(|| cfg.author.clone()),
            date: date.clone().unwrap_or_else(today_iso),
        };

        let path = expand_tilde(file.as_deref().unwrap_or(&cfg.output_file));
        let renderer = ChartRenderer::new(cfg.chart_dpi);

        ExportLogic::write_booklet(session.table(), &meta, &renderer, &path, *force)
            .map_err(|e| AppError::PdfGeneration(Box::new(e)))?;
    }
    Ok(())
}
