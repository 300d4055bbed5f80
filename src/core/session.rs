//! In-memory editing session over a [`SiteTable`].
//!
//! Every mutation goes through [`Session::apply`], which always finishes with
//! a derived-column pass so that risk levels and suggestions never go stale.

use crate::core::intake::parse_number;
use crate::errors::{AppError, AppResult};
use crate::models::{SiteRecord, SiteTable};

/// A single change to the table. Row numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Add {
        id: String,
        fl: Option<f64>,
        ground_type: String,
        lat: Option<f64>,
        lon: Option<f64>,
        note: Option<String>,
    },
    SetFl {
        row: usize,
        fl: Option<f64>,
    },
    SetGroundType {
        row: usize,
        ground_type: String,
    },
    SetNote {
        row: usize,
        note: Option<String>,
    },
    Remove {
        row: usize,
    },
}

impl Edit {
    /// Parse `"id,FL,groundType[,lat,lon[,note]]"`.
    pub fn parse_add(s: &str) -> AppResult<Self> {
        let mut parts = s.splitn(6, ',').map(str::trim);

        let id = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::InvalidEdit(format!("missing id in '{s}'")))?;
        let fl = parts.next().and_then(parse_number);
        let ground_type = parts.next().unwrap_or("").to_string();
        let lat = parts.next().and_then(parse_number);
        let lon = parts.next().and_then(parse_number);
        let note = parts.next().map(str::to_string);

        Ok(Edit::Add {
            id: id.to_string(),
            fl,
            ground_type,
            lat,
            lon,
            note,
        })
    }

    /// Parse `"ROW=VALUE"` as an FL update; a non-numeric value clears FL.
    pub fn parse_set_fl(s: &str) -> AppResult<Self> {
        let (row, value) = split_assignment(s)?;
        Ok(Edit::SetFl {
            row,
            fl: parse_number(value),
        })
    }

    pub fn parse_set_ground(s: &str) -> AppResult<Self> {
        let (row, value) = split_assignment(s)?;
        Ok(Edit::SetGroundType {
            row,
            ground_type: value.trim().to_string(),
        })
    }

    pub fn parse_set_note(s: &str) -> AppResult<Self> {
        let (row, value) = split_assignment(s)?;
        Ok(Edit::SetNote {
            row,
            note: Some(value.to_string()),
        })
    }
}

fn parse_row(s: &str) -> AppResult<usize> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| AppError::InvalidEdit(format!("invalid row number '{}'", s.trim())))
}

fn split_assignment(s: &str) -> AppResult<(usize, &str)> {
    let (row, value) = s
        .split_once('=')
        .ok_or_else(|| AppError::InvalidEdit(format!("expected ROW=VALUE, got '{s}'")))?;
    Ok((parse_row(row)?, value))
}

/// Session-scoped table state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    table: SiteTable,
}

impl Session {
    pub fn new(table: SiteTable) -> Self {
        let mut session = Self { table };
        session.recompute_derived();
        session
    }

    pub fn table(&self) -> &SiteTable {
        &self.table
    }

    /// Apply one edit, then refresh every derived column.
    pub fn apply(&mut self, edit: Edit) -> AppResult<()> {
        match edit {
            Edit::Add {
                id,
                fl,
                ground_type,
                lat,
                lon,
                note,
            } => {
                let rec = SiteRecord::new(id, fl, ground_type)
                    .with_coordinates(lat, lon)
                    .with_note(note);
                self.table.records_mut().push(rec);
            }
            Edit::SetFl { row, fl } => self.row_mut(row)?.set_fl(fl),
            Edit::SetGroundType { row, ground_type } => {
                self.row_mut(row)?.set_ground_type(ground_type)
            }
            Edit::SetNote { row, note } => self.row_mut(row)?.set_note(note),
            Edit::Remove { row } => {
                self.check_row(row)?;
                self.table.records_mut().remove(row - 1);
            }
        }

        self.recompute_derived();
        Ok(())
    }

    /// Apply edits in order, stopping at the first failure.
    pub fn apply_all<I>(&mut self, edits: I) -> AppResult<()>
    where
        I: IntoIterator<Item = Edit>,
    {
        for edit in edits {
            self.apply(edit)?;
        }
        Ok(())
    }

    /// Derived-column pass over the whole table.
    pub fn recompute_derived(&mut self) {
        for rec in self.table.records_mut().iter_mut() {
            rec.derive();
        }
    }

    fn check_row(&self, row: usize) -> AppResult<()> {
        if row == 0 || row > self.table.len() {
            return Err(AppError::InvalidRow(row));
        }
        Ok(())
    }

    fn row_mut(&mut self, row: usize) -> AppResult<&mut SiteRecord> {
        self.check_row(row)?;
        Ok(&mut self.table.records_mut()[row - 1])
    }
}
