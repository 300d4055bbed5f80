use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::intake::sample_table;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::path::expand_tilde;

/// Handle the `sample` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Sample { file, force } = cmd {
        let path = expand_tilde(file);
        ExportLogic::export_table(&sample_table(), ExportFormat::Csv, &path, *force)?;
    }
    Ok(())
}
