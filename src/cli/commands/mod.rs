pub mod build;
pub mod charts;
pub mod config;
pub mod sample;
pub mod show;
pub mod table;

use crate::cli::parser::{EditArgs, InputArgs};
use crate::core::intake::{load_csv_path, sample_table};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Load the input table (or the sample), then apply the requested edits.
pub(crate) fn load_session(input: &InputArgs, edits: &EditArgs) -> AppResult<Session> {
    let table = match &input.input {
        Some(p) => {
            let path = expand_tilde(p);
            info(format!("Loading site table: {}", path.display()));
            load_csv_path(&path)?
        }
        None => {
            info("No CSV provided. Using sample data.");
            sample_table()
        }
    };

    let mut session = Session::new(table);
    session.apply_all(edits.to_edits()?)?;
    Ok(session)
}
