use crate::core::session::Edit;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for liqbook
/// CLI application to classify liquefaction site records and build a PDF booklet
#[derive(Parser)]
#[command(
    name = "liqbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Liquefaction report generator: classify site FL values, draw charts and build a PDF booklet",
    long_about = None
)]
pub struct Cli {
    /// Read defaults from this YAML file instead of ~/.liqbook/liqbook.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Source table. Without `--input` the built-in sample is used.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// CSV file (UTF-8) with columns id, FL, groundType and optional lat, lon, note
    #[arg(long, short = 'i', value_name = "CSV")]
    pub input: Option<String>,
}

/// Table edits, applied after loading in this order: add, set-fl, set-ground,
/// set-note, remove. Row numbers are 1-based.
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// Append a row: "id,FL,groundType[,lat,lon[,note]]"
    #[arg(long = "add", value_name = "ROW")]
    pub add: Vec<String>,

    /// Change the FL value of a row: "ROW=FL" (non-numeric clears it)
    #[arg(long = "set-fl", value_name = "ROW=FL")]
    pub set_fl: Vec<String>,

    /// Change the ground type of a row: "ROW=TEXT"
    #[arg(long = "set-ground", value_name = "ROW=TEXT")]
    pub set_ground: Vec<String>,

    /// Change the note of a row: "ROW=TEXT" (empty text clears it)
    #[arg(long = "set-note", value_name = "ROW=TEXT")]
    pub set_note: Vec<String>,

    /// Delete a row by number. Numbers refer to the table before any
    /// removal, so `--remove 1 --remove 2` drops the first two rows.
    #[arg(long = "remove", value_name = "ROW")]
    pub remove: Vec<usize>,
}

impl EditArgs {
    pub fn to_edits(&self) -> AppResult<Vec<Edit>> {
        let mut edits = Vec::new();

        for s in &self.add {
            edits.push(Edit::parse_add(s)?);
        }
        for s in &self.set_fl {
            edits.push(Edit::parse_set_fl(s)?);
        }
        for s in &self.set_ground {
            edits.push(Edit::parse_set_ground(s)?);
        }
        for s in &self.set_note {
            edits.push(Edit::parse_set_note(s)?);
        }

        // Highest row first so earlier removals don't shift later ones
        let mut rows = self.remove.clone();
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows.dedup();
        edits.extend(rows.into_iter().map(|row| Edit::Remove { row }));

        Ok(edits)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the built-in sample table to a CSV file
    Sample {
        /// Destination CSV file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the normalized table with risk levels and suggestions
    Show {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// Render the FL bar chart and the location chart as PNG files
    Charts {
        #[command(flatten)]
        input: InputArgs,

        /// Directory receiving fl_bar.png and locations.png
        #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
        out_dir: String,

        /// Overwrite existing images without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// Generate the PDF report booklet
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Project name shown on the cover
        #[arg(long)]
        project: Option<String>,

        /// Author shown on the cover ("Prepared by")
        #[arg(long)]
        author: Option<String>,

        /// Report date (free text, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Output PDF path (default: Liquefaction_Report_Booklet.pdf)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// Export the normalized table (derived columns included)
    Table {
        #[command(flatten)]
        input: InputArgs,

        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// Show the effective configuration
    Config {
        /// Print the configuration as YAML
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
