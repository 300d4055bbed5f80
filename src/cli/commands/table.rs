use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

/// Handle the `table` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Table {
        input,
        format,
        file,
        force,
        edits,
    } = cmd
    {
        let session = load_session(input, edits)?;
        let path = expand_tilde(file);
        ExportLogic::export_table(session.table(), *format, &path, *force)?;
    }
    Ok(())
}
