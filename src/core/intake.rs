//! Data intake: turn a CSV upload (or the built-in sample) into a normalized
//! [`SiteTable`].
//!
//! Header names are case-sensitive. `id`, `FL` and `groundType` are required
//! but a missing column is tolerated and filled with empty/missing values.
//! `ground_type` is accepted as an alias of `groundType`. Coordinates are
//! used only when both `lat` and `lon` columns are present.

use crate::errors::AppResult;
use crate::models::{SiteRecord, SiteTable};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COL_ID: &str = "id";
const COL_FL: &str = "FL";
const COL_GROUND: &[&str] = &["groundType", "ground_type"];
const COL_LAT: &str = "lat";
const COL_LON: &str = "lon";
const COL_NOTE: &str = "note";

/// Column positions resolved once from the header row.
struct Columns {
    id: Option<usize>,
    fl: Option<usize>,
    ground: Option<usize>,
    coords: Option<(usize, usize)>,
    note: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let lat = find(COL_LAT);
        let lon = find(COL_LON);

        Self {
            id: find(COL_ID),
            fl: find(COL_FL),
            ground: COL_GROUND.iter().find_map(|n| find(*n)),
            coords: lat.zip(lon),
            note: find(COL_NOTE),
        }
    }
}

/// Lenient numeric coercion: anything that is not a number becomes missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn field<'r>(row: &'r StringRecord, idx: Option<usize>) -> &'r str {
    idx.and_then(|i| row.get(i)).unwrap_or("")
}

/// Load a site table from any CSV reader.
pub fn load_csv<R: Read>(reader: R) -> AppResult<SiteTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(rdr.headers()?);
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;

        let mut rec = SiteRecord::new(
            field(&row, columns.id).trim(),
            parse_number(field(&row, columns.fl)),
            field(&row, columns.ground).trim(),
        );

        if let Some((lat, lon)) = columns.coords {
            rec = rec.with_coordinates(
                parse_number(field(&row, Some(lat))),
                parse_number(field(&row, Some(lon))),
            );
        }

        let note = field(&row, columns.note);
        rec = rec.with_note(Some(note.to_string()));

        records.push(rec);
    }

    Ok(SiteTable::new(records, columns.coords.is_some()))
}

/// Load a site table from a CSV file on disk.
pub fn load_csv_path(path: &Path) -> AppResult<SiteTable> {
    let file = File::open(path)?;
    load_csv(file)
}

/// Built-in demo data used when no CSV is supplied.
pub fn sample_table() -> SiteTable {
    let rows = [
        ("A01", 35.6895, 139.6917, 0.81, "Soft ground"),
        ("A02", 35.6900, 139.6920, 1.15, "Medium"),
        ("A03", 35.6880, 139.6900, 0.95, "Soft ground"),
    ];

    let records = rows
        .iter()
        .map(|&(id, lat, lon, fl, ground)| {
            SiteRecord::new(id, Some(fl), ground).with_coordinates(Some(lat), Some(lon))
        })
        .collect();

    SiteTable::new(records, true)
}
