//! The sheet controller: owns the header, rows and duty window, and gates
//! every row / header mutation on the open/closed state.

use crate::core::aggregate::{self, Totals};
use crate::core::sequencing;
use crate::errors::{AppError, AppResult};
use crate::models::duty::DutyWindow;
use crate::models::field::RowField;
use crate::models::log_row::LogRow;
use crate::models::row_set::RowSet;
use crate::models::sheet_meta::{HeaderUpdate, SheetMeta};
use crate::utils::date::parse_date;
use crate::utils::time::now_clock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub meta: SheetMeta,
    pub rows: RowSet,
    pub duty: DutyWindow,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.meta.closed
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.meta.closed {
            return Err(AppError::SheetClosed);
        }
        Ok(())
    }

    fn row_mut(&mut self, label: &str) -> AppResult<&mut LogRow> {
        self.rows
            .find_mut(label)
            .ok_or_else(|| AppError::RowNotFound(label.to_string()))
    }

    // ------------------------------------------------
    // Rows
    // ------------------------------------------------

    /// Add the next numbered load row and return its label.
    pub fn add_load_row(&mut self) -> AppResult<String> {
        self.ensure_open()?;

        let row = sequencing::create_load_row(&self.rows, &self.meta.start_fuel);
        let label = row.load.clone();
        sequencing::insert_row(&mut self.rows, row);
        Ok(label)
    }

    /// Add the ferry row. Returns `false` when one already exists.
    pub fn add_ferry_row(&mut self) -> AppResult<bool> {
        self.ensure_open()?;

        if self.rows.has_ferry() {
            return Ok(false);
        }
        let row = sequencing::create_ferry_row(&self.meta.start_fuel);
        Ok(sequencing::insert_row(&mut self.rows, row))
    }

    pub fn update_field(&mut self, label: &str, field: RowField, value: &str) -> AppResult<()> {
        self.ensure_open()?;
        let row = self.row_mut(label)?;
        sequencing::update_field(row, field, value)
    }

    /// Stamp takeoff or landing with the current wall-clock time.
    pub fn set_now(&mut self, label: &str, field: RowField) -> AppResult<String> {
        if !matches!(field, RowField::Takeoff | RowField::Landing) {
            return Err(AppError::UnknownField(format!(
                "{} cannot be set to now",
                field.header()
            )));
        }

        let now = now_clock();
        self.update_field(label, field, &now)?;
        Ok(now)
    }

    pub fn clear_row(&mut self, label: &str) -> AppResult<()> {
        self.ensure_open()?;
        sequencing::clear_row(self.row_mut(label)?);
        Ok(())
    }

    pub fn delete_row(&mut self, label: &str) -> AppResult<LogRow> {
        self.ensure_open()?;
        self.rows
            .remove(label)
            .ok_or_else(|| AppError::RowNotFound(label.to_string()))
    }

    /// Replace every row at once (CSV import).
    pub fn replace_rows(&mut self, rows: RowSet) -> AppResult<()> {
        self.ensure_open()?;
        self.rows = rows;
        Ok(())
    }

    // ------------------------------------------------
    // Header
    // ------------------------------------------------

    /// Apply header edits. A non-empty starting fuel is seeded forward into
    /// the first row if that row has no fuel yet.
    pub fn update_header(&mut self, update: HeaderUpdate) -> AppResult<()> {
        self.ensure_open()?;

        if let Some(date) = &update.date
            && !date.is_empty()
            && parse_date(date).is_none()
        {
            return Err(AppError::InvalidDate(date.clone()));
        }

        let HeaderUpdate {
            pilot,
            dz,
            registration,
            date,
            start_fuel,
        } = update;

        if let Some(v) = pilot {
            self.meta.pilot = v;
        }
        if let Some(v) = dz {
            self.meta.dz = v;
        }
        if let Some(v) = registration {
            self.meta.registration = v;
        }
        if let Some(v) = date {
            self.meta.date = v;
        }
        if let Some(v) = start_fuel {
            aggregate::seed_start_fuel(&mut self.rows, &v);
            self.meta.start_fuel = v;
        }

        Ok(())
    }

    // ------------------------------------------------
    // Duty window (never locked)
    // ------------------------------------------------

    pub fn set_duty(&mut self, start: Option<String>, end: Option<String>) {
        if let Some(s) = start {
            self.duty.duty_start = s;
        }
        if let Some(e) = end {
            self.duty.duty_end = e;
        }
    }

    // ------------------------------------------------
    // Lifecycle
    // ------------------------------------------------

    /// Freeze the sheet. Closing a closed sheet changes nothing.
    pub fn close(&mut self) {
        self.meta.closed = true;
    }

    /// Drop every row and reopen, keeping pilot, DZ, registration, date and
    /// starting fuel.
    pub fn start_new_flight(&mut self) {
        self.rows.clear();
        self.meta.closed = false;
    }

    // ------------------------------------------------
    // Read side
    // ------------------------------------------------

    pub fn visible_rows(&self, query: &str) -> Vec<&LogRow> {
        aggregate::filter_rows(&self.rows, query)
    }

    pub fn totals(&self, query: &str) -> Totals {
        aggregate::totals(self.visible_rows(query))
    }

    pub fn ending_fuel(&self) -> String {
        aggregate::ending_fuel(&self.rows)
    }
}
