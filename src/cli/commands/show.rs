use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SiteTable;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{GREY, color_for_risk};
use crate::utils::formatting::format_optional;
use crate::utils::table::{Cell, Table};

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Show { input, edits } = cmd {
        let session = load_session(input, edits)?;
        let table = session.table();

        if table.is_empty() {
            warning("The table has no rows.");
            return Ok(());
        }

        header(format!("{} site(s)", table.len()));
        print!("{}", render_sites(table).render());
    }
    Ok(())
}

fn optional_cell(value: Option<f64>) -> Cell {
    match value {
        Some(_) => Cell::plain(format_optional(value)),
        None => Cell::colored(format_optional(value), GREY),
    }
}

fn render_sites(table: &SiteTable) -> Table {
    let coords = table.has_coordinates();

    let mut headers = vec!["#", "id", "FL", "groundType"];
    if coords {
        headers.extend(["lat", "lon"]);
    }
    headers.extend(["risk", "suggestion", "note"]);

    let mut out = Table::new(&headers);

    for (i, rec) in table.records().iter().enumerate() {
        let mut row = vec![
            Cell::plain((i + 1).to_string()),
            Cell::plain(rec.id()),
            optional_cell(rec.fl()),
            Cell::plain(rec.ground_type()),
        ];
        if coords {
            row.push(optional_cell(rec.lat()));
            row.push(optional_cell(rec.lon()));
        }
        row.push(Cell::colored(
            rec.risk_level().as_str(),
            color_for_risk(rec.risk_level()),
        ));
        row.push(Cell::plain(rec.suggestion()));
        row.push(Cell::plain(rec.note().unwrap_or("")));

        out.add_row(row);
    }

    out
}
