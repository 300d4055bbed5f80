use crate::chart::ChartRenderer;
use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

/// Handle the `charts` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Charts {
        input,
        out_dir,
        force,
        edits,
    } = cmd
    {
        let session = load_session(input, edits)?;
        let dir = expand_tilde(out_dir);
        std::fs::create_dir_all(&dir)?;

        let renderer = ChartRenderer::new(cfg.chart_dpi);
        ExportLogic::write_charts(session.table(), &renderer, &dir, *force)?;
    }
    Ok(())
}
